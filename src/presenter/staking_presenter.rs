use crate::entity::{DashboardError, StakingAction, StakingState};
use crate::interactor::staking_interactor::{StakingInteractor, StakingReceipt};
use crate::presenter::notify_rejection;
use crate::view::notifier::Notifier;
use crate::view::staking_view::StakingView;
use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[async_trait]
pub trait StakingPresenter: Send + Sync {
    async fn show_pools(&self) -> Result<()>;
    async fn stake(&self, pool_id: &str, amount: &str) -> Result<()>;
    async fn unstake(&self, pool_id: &str, amount: &str) -> Result<()>;
    async fn claim(&self, pool_id: &str) -> Result<()>;
    async fn pool_state(&self, pool_id: &str) -> StakingState;
}

pub struct StakingPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    in_flight: Mutex<HashMap<String, StakingAction>>,
}

impl<I, V> StakingPresenterImpl<I, V>
where
    I: StakingInteractor,
    V: StakingView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, notifier: Arc<dyn Notifier + Send + Sync>) -> Self {
        Self {
            interactor,
            view,
            notifier,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    fn success_message(receipt: &StakingReceipt) -> String {
        let pool = &receipt.pool;
        match receipt.action {
            StakingAction::Stake(_) => {
                format!("Staked {} {}", receipt.amount.normalize(), pool.token_symbol)
            }
            StakingAction::Unstake(_) => {
                format!("Unstaked {} {}", receipt.amount.normalize(), pool.token_symbol)
            }
            StakingAction::Claim => {
                format!("Claimed {} {}", receipt.amount.normalize(), pool.reward_token)
            }
        }
    }

    /// One action per pool at a time; other pools stay available.
    async fn run_action(&self, pool_id: &str, kind: &str, amount: Option<&str>) -> Result<()> {
        let checked = async {
            let action = self.interactor.validate_action(pool_id, kind, amount).await?;
            let pool = self.interactor.get_pool(pool_id).await?;
            Ok::<_, anyhow::Error>((action, pool))
        }
        .await;
        let (action, pool) = match checked {
            Ok(checked) => checked,
            Err(e) => return notify_rejection(self.notifier.as_ref(), e).await,
        };

        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.contains_key(pool_id) {
                drop(in_flight);
                return notify_rejection(
                    self.notifier.as_ref(),
                    DashboardError::ActionInProgress(format!("pool {}", pool_id)).into(),
                )
                .await;
            }
            in_flight.insert(pool_id.to_string(), action);
        }

        if let Err(e) = self.view.display_acting(&pool, &action).await {
            warn!("Failed to display {} on pool {}: {}", action.label(), pool.id, e);
        }

        let outcome = self.interactor.execute_action(pool_id, action).await;
        self.in_flight.lock().await.remove(pool_id);

        match outcome {
            Ok(receipt) => {
                self.notifier.success(Self::success_message(&receipt)).await;
                Ok(())
            }
            Err(e) => notify_rejection(self.notifier.as_ref(), e).await,
        }
    }
}

#[async_trait]
impl<I, V> StakingPresenter for StakingPresenterImpl<I, V>
where
    I: StakingInteractor + Send + Sync,
    V: StakingView + Send + Sync,
{
    async fn show_pools(&self) -> Result<()> {
        let pools = self.interactor.list_pools().await?;
        self.view.display_pools(&pools).await
    }

    async fn stake(&self, pool_id: &str, amount: &str) -> Result<()> {
        self.run_action(pool_id, "stake", Some(amount)).await
    }

    async fn unstake(&self, pool_id: &str, amount: &str) -> Result<()> {
        self.run_action(pool_id, "unstake", Some(amount)).await
    }

    async fn claim(&self, pool_id: &str) -> Result<()> {
        self.run_action(pool_id, "claim", None).await
    }

    async fn pool_state(&self, pool_id: &str) -> StakingState {
        match self.in_flight.lock().await.get(pool_id) {
            Some(action) => StakingState::Acting(*action),
            None => StakingState::Idle,
        }
    }
}
