use crate::catalog::TransactionRepository;
use crate::entity::{
    DashboardError, Quote, RejectionReason, SwapForm, SwapIntent, SwapResult, Token,
    Transaction, TransactionKind, TransactionStatus,
};
use crate::interactor::quote_interactor::{minimum_received, QuoteInteractor};
use crate::services::{SettlementOutcome, SettlementService};
use crate::utils::{parse_amount, parse_slippage};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{error, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

const MAX_SLIPPAGE_PERCENT: i64 = 50;

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    async fn find_token(&self, symbol: &str) -> Result<Token>;

    /// Quote for the current form values
    fn quote(&self, form: &SwapForm) -> Quote;

    /// Parses a slippage tolerance such as "0.5%" into percent
    fn validate_slippage(&self, slippage_str: &str) -> Result<Decimal>;

    /// Turns the form into a confirmable intent, or fails with `InvalidAmount`
    fn build_intent(&self, form: &SwapForm) -> Result<SwapIntent>;

    /// Settles a confirmed intent and records the outcome in the activity feed
    async fn execute_swap(&self, intent: &SwapIntent) -> Result<SwapResult>;
}

pub struct SwapInteractorImpl<Q>
where
    Q: QuoteInteractor,
{
    quote_interactor: Arc<Q>,
    settlement_service: Arc<dyn SettlementService + Send + Sync>,
    transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,
    settlement_timeout: Duration,
}

impl<Q> SwapInteractorImpl<Q>
where
    Q: QuoteInteractor + 'static,
{
    pub fn new(
        quote_interactor: Arc<Q>,
        settlement_service: Arc<dyn SettlementService + Send + Sync>,
        transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,
        settlement_timeout: Duration,
    ) -> Self {
        Self {
            quote_interactor,
            settlement_service,
            transaction_repository,
            settlement_timeout,
        }
    }

    async fn record(&self, intent: &SwapIntent, status: TransactionStatus, hash: String) {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Swap,
            status,
            hash,
            timestamp: Utc::now(),
            amount: intent.input_amount,
            token: intent.input_token.symbol.clone(),
        };

        if let Err(e) = self.transaction_repository.record(transaction).await {
            warn!("Failed to record swap {}: {}", intent.id, e);
        }
    }

    fn rejected(intent: &SwapIntent, reason: RejectionReason) -> SwapResult {
        SwapResult::Rejected {
            source_token: intent.input_token.symbol.clone(),
            target_token: intent.output_token.symbol.clone(),
            amount_in: intent.input_amount,
            reason,
        }
    }
}

#[async_trait]
impl<Q> SwapInteractor for SwapInteractorImpl<Q>
where
    Q: QuoteInteractor + Send + Sync + 'static,
{
    async fn find_token(&self, symbol: &str) -> Result<Token> {
        self.quote_interactor.find_token(symbol).await
    }

    fn quote(&self, form: &SwapForm) -> Quote {
        self.quote_interactor
            .calculate(&form.input_token, &form.output_token, &form.input_amount)
    }

    fn validate_slippage(&self, slippage_str: &str) -> Result<Decimal> {
        let slippage = parse_slippage(slippage_str).ok_or_else(|| {
            DashboardError::InvalidAmount(format!("'{}' is not a slippage value", slippage_str))
        })?;

        if slippage <= Decimal::ZERO || slippage > Decimal::from(MAX_SLIPPAGE_PERCENT) {
            return Err(DashboardError::InvalidAmount(format!(
                "Slippage must be above 0% and at most {}%",
                MAX_SLIPPAGE_PERCENT
            ))
            .into());
        }

        Ok(slippage)
    }

    fn build_intent(&self, form: &SwapForm) -> Result<SwapIntent> {
        if form.input_amount.trim().is_empty() {
            return Err(DashboardError::InvalidAmount("Please enter an amount".to_string()).into());
        }

        let input_amount = parse_amount(&form.input_amount);
        if input_amount <= Decimal::ZERO {
            return Err(DashboardError::InvalidAmount(
                "Amount must be greater than zero".to_string(),
            )
            .into());
        }

        let quote = self.quote(form);
        if quote.out_of_range {
            return Err(DashboardError::InvalidAmount("Amount is too large".to_string()).into());
        }
        let output_amount = parse_amount(&quote.output_amount);

        Ok(SwapIntent {
            id: Uuid::new_v4(),
            input_token: form.input_token.clone(),
            output_token: form.output_token.clone(),
            input_amount,
            output_amount,
            slippage_percent: form.slippage_percent,
            minimum_received: minimum_received(output_amount, form.slippage_percent),
            quote,
            created_at: Utc::now(),
        })
    }

    async fn execute_swap(&self, intent: &SwapIntent) -> Result<SwapResult> {
        let outcome = timeout(
            self.settlement_timeout,
            self.settlement_service.settle_swap(intent),
        )
        .await;

        let result = match outcome {
            Err(_) => {
                error!(
                    "Swap {} not confirmed within {:?}",
                    intent.id, self.settlement_timeout
                );
                Self::rejected(intent, RejectionReason::TimedOut(self.settlement_timeout))
            }
            Ok(Err(e)) => {
                error!("Swap {} submission failed: {}", intent.id, e);
                Self::rejected(intent, RejectionReason::SettlementFailed(e.to_string()))
            }
            Ok(Ok(SettlementOutcome::Reverted { reason })) => {
                error!("Swap {} reverted: {}", intent.id, reason);
                Self::rejected(intent, RejectionReason::SettlementFailed(reason))
            }
            Ok(Ok(SettlementOutcome::Confirmed {
                tx_hash,
                amount_out,
            })) => {
                if amount_out < intent.minimum_received {
                    error!(
                        "Swap {} realized {} below minimum {}",
                        intent.id, amount_out, intent.minimum_received
                    );
                    self.record(intent, TransactionStatus::Failed, tx_hash).await;
                    return Ok(Self::rejected(
                        intent,
                        RejectionReason::SlippageExceeded {
                            minimum: intent.minimum_received,
                            realized: amount_out,
                        },
                    ));
                }

                info!("Swap {} settled in {}", intent.id, tx_hash);
                self.record(intent, TransactionStatus::Confirmed, tx_hash.clone())
                    .await;
                return Ok(SwapResult::Settled {
                    source_token: intent.input_token.symbol.clone(),
                    target_token: intent.output_token.symbol.clone(),
                    amount_in: intent.input_amount,
                    amount_out,
                    tx_hash,
                });
            }
        };

        self.record(intent, TransactionStatus::Failed, String::new())
            .await;
        Ok(result)
    }
}
