use crate::entity::{DashboardError, SwapForm, SwapResult, SwapSide, SwapState};
use crate::interactor::swap_interactor::SwapInteractor;
use crate::presenter::notify_rejection;
use crate::utils::format_amount;
use crate::view::notifier::Notifier;
use crate::view::swap_view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    async fn show_form(&self) -> Result<()>;
    async fn select_token(&self, side: SwapSide, symbol: &str) -> Result<()>;
    async fn switch_tokens(&self) -> Result<()>;
    async fn set_input_amount(&self, amount: &str) -> Result<()>;
    async fn set_max_amount(&self) -> Result<()>;
    async fn set_slippage(&self, slippage: &str) -> Result<()>;
    async fn request_swap(&self) -> Result<()>;
    async fn process_swap_command(&self, command_parts: Vec<&str>) -> Result<()>;
    /// Settles the pending intent. `None` when there was nothing to confirm.
    async fn confirm(&self) -> Result<Option<SwapResult>>;
    async fn cancel(&self) -> Result<()>;
    async fn state(&self) -> SwapState;
    async fn form(&self) -> SwapForm;
}

struct SwapSession {
    form: SwapForm,
    state: SwapState,
}

pub struct SwapPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    session: Mutex<SwapSession>,
}

impl<I, V> SwapPresenterImpl<I, V>
where
    I: SwapInteractor,
    V: SwapView,
{
    pub fn new(
        interactor: Arc<I>,
        view: Arc<V>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        form: SwapForm,
    ) -> Self {
        Self {
            interactor,
            view,
            notifier,
            session: Mutex::new(SwapSession {
                form,
                state: SwapState::Idle,
            }),
        }
    }

    async fn reject(&self, e: anyhow::Error) -> Result<()> {
        notify_rejection(self.notifier.as_ref(), e).await
    }

    async fn render(&self, form: &SwapForm) -> Result<()> {
        let quote = self.interactor.quote(form);
        self.view.display_form(form, &quote).await
    }

    /// Applies `edit` to the form while idle and redraws it.
    async fn edit_form<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut SwapForm) -> Result<()> + Send,
    {
        let mut session = self.session.lock().await;
        if !session.state.is_idle() {
            let state = session.state.name();
            drop(session);
            return self
                .reject(
                    DashboardError::InvalidState {
                        action: "edit the swap form",
                        state,
                    }
                    .into(),
                )
                .await;
        }

        if let Err(e) = edit(&mut session.form) {
            drop(session);
            return self.reject(e).await;
        }
        let form = session.form.clone();
        drop(session);

        self.render(&form).await
    }
}

#[async_trait]
impl<I, V> SwapPresenter for SwapPresenterImpl<I, V>
where
    I: SwapInteractor + Send + Sync,
    V: SwapView + Send + Sync,
{
    async fn show_form(&self) -> Result<()> {
        let form = self.session.lock().await.form.clone();
        self.render(&form).await
    }

    async fn select_token(&self, side: SwapSide, symbol: &str) -> Result<()> {
        let token = match self.interactor.find_token(symbol).await {
            Ok(token) => token,
            Err(e) => return self.reject(e).await,
        };

        self.edit_form(move |form| {
            form.select_token(side, token);
            Ok(())
        })
        .await
    }

    async fn switch_tokens(&self) -> Result<()> {
        self.edit_form(|form| {
            form.switch_tokens();
            Ok(())
        })
        .await
    }

    async fn set_input_amount(&self, amount: &str) -> Result<()> {
        let amount = amount.trim().to_string();
        self.edit_form(move |form| {
            form.input_amount = amount;
            Ok(())
        })
        .await
    }

    async fn set_max_amount(&self) -> Result<()> {
        self.edit_form(|form| {
            form.input_amount = form.input_token.balance_or_zero().normalize().to_string();
            Ok(())
        })
        .await
    }

    async fn set_slippage(&self, slippage: &str) -> Result<()> {
        let slippage = match self.interactor.validate_slippage(slippage) {
            Ok(slippage) => slippage,
            Err(e) => return self.reject(e).await,
        };

        self.edit_form(move |form| {
            form.slippage_percent = slippage;
            Ok(())
        })
        .await
    }

    async fn request_swap(&self) -> Result<()> {
        let mut session = self.session.lock().await;
        if !session.state.is_idle() {
            let state = session.state.name();
            drop(session);
            return self
                .reject(
                    DashboardError::InvalidState {
                        action: "request a swap",
                        state,
                    }
                    .into(),
                )
                .await;
        }

        let intent = match self.interactor.build_intent(&session.form) {
            Ok(intent) => intent,
            Err(e) => {
                drop(session);
                return self.reject(e).await;
            }
        };

        info!(
            "Swap {} awaiting confirmation: {} {} -> {}",
            intent.id, intent.input_amount, intent.input_token.symbol, intent.output_token.symbol
        );
        session.state = SwapState::PendingConfirmation {
            intent: intent.clone(),
        };
        drop(session);

        self.view.display_confirmation(&intent).await
    }

    async fn process_swap_command(&self, command_parts: Vec<&str>) -> Result<()> {
        match command_parts.len() {
            1 => return self.request_swap().await,
            4 | 5 => {}
            _ => return self.view.display_usage().await,
        }

        let amount_str = command_parts[1];
        let source_token = command_parts[2];
        let target_token = command_parts[3];
        let slippage_str = command_parts.get(4).copied();

        if source_token.eq_ignore_ascii_case(target_token) {
            return self.reject(DashboardError::SameToken.into()).await;
        }

        let source = self.interactor.find_token(source_token).await;
        let target = self.interactor.find_token(target_token).await;
        let (source, target) = match (source, target) {
            (Ok(source), Ok(target)) => (source, target),
            (Err(e), _) | (_, Err(e)) => return self.reject(e).await,
        };

        let slippage = match slippage_str.map(|s| self.interactor.validate_slippage(s)) {
            Some(Ok(slippage)) => Some(slippage),
            Some(Err(e)) => return self.reject(e).await,
            None => None,
        };

        {
            let mut session = self.session.lock().await;
            if session.state.is_idle() {
                let form = &mut session.form;
                form.input_token = source;
                form.output_token = target;
                form.input_amount = amount_str.to_string();
                if let Some(slippage) = slippage {
                    form.slippage_percent = slippage;
                }
            }
        }

        // Rejects non-idle states itself
        self.request_swap().await
    }

    async fn confirm(&self) -> Result<Option<SwapResult>> {
        let mut session = self.session.lock().await;
        let intent = match std::mem::take(&mut session.state) {
            SwapState::PendingConfirmation { intent } => {
                session.state = SwapState::Settling {
                    intent: intent.clone(),
                };
                intent
            }
            other => {
                let state = other.name();
                session.state = other;
                drop(session);
                self.reject(
                    DashboardError::InvalidState {
                        action: "confirm",
                        state,
                    }
                    .into(),
                )
                .await?;
                return Ok(None);
            }
        };
        drop(session);

        if let Err(e) = self.view.display_settling(&intent).await {
            warn!("Failed to display settlement of swap {}: {}", intent.id, e);
        }

        let result = self.interactor.execute_swap(&intent).await;

        {
            let mut session = self.session.lock().await;
            session.state = SwapState::Idle;
            if matches!(&result, Ok(result) if result.is_settled()) {
                session.form.input_amount.clear();
            }
        }

        let result = result?;
        match &result {
            SwapResult::Settled {
                source_token,
                target_token,
                amount_in,
                amount_out,
                ..
            } => {
                self.notifier
                    .success(format!(
                        "Swapped {} {} for {} {}",
                        amount_in.normalize(),
                        source_token,
                        format_amount(*amount_out),
                        target_token
                    ))
                    .await;
            }
            SwapResult::Rejected {
                source_token,
                target_token,
                amount_in,
                reason,
            } => {
                self.notifier
                    .error(format!(
                        "Swap of {} {} to {} failed: {}",
                        amount_in.normalize(),
                        source_token,
                        target_token,
                        reason
                    ))
                    .await;
            }
        }

        Ok(Some(result))
    }

    async fn cancel(&self) -> Result<()> {
        let mut session = self.session.lock().await;
        let intent = match std::mem::take(&mut session.state) {
            SwapState::PendingConfirmation { intent } => intent,
            other => {
                let state = other.name();
                session.state = other;
                drop(session);
                return self
                    .reject(
                        DashboardError::InvalidState {
                            action: "cancel",
                            state,
                        }
                        .into(),
                    )
                    .await;
            }
        };
        drop(session);

        info!("Swap {} cancelled", intent.id);
        self.view.display_cancelled(&intent).await
    }

    async fn state(&self) -> SwapState {
        self.session.lock().await.state.clone()
    }

    async fn form(&self) -> SwapForm {
        self.session.lock().await.form.clone()
    }
}
