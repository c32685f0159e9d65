use crate::catalog::{StakingPoolRepository, TransactionRepository};
use crate::entity::{
    DashboardError, StakingAction, StakingPool, Transaction, TransactionKind, TransactionStatus,
};
use crate::services::{SettlementOutcome, SettlementService};
use crate::utils::try_parse_amount;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{error, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

/// Confirmed staking action with the pool as it looks afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StakingReceipt {
    pub pool: StakingPool,
    pub action: StakingAction,
    pub amount: Decimal,
    pub tx_hash: String,
}

#[async_trait]
pub trait StakingInteractor: Send + Sync {
    async fn list_pools(&self) -> Result<Vec<StakingPool>>;

    async fn get_pool(&self, pool_id: &str) -> Result<StakingPool>;

    /// Checks the action against the pool and returns the action to submit
    async fn validate_action(
        &self,
        pool_id: &str,
        kind: &str,
        amount_text: Option<&str>,
    ) -> Result<StakingAction>;

    async fn execute_action(&self, pool_id: &str, action: StakingAction) -> Result<StakingReceipt>;
}

pub struct StakingInteractorImpl {
    pool_repository: Arc<dyn StakingPoolRepository + Send + Sync>,
    settlement_service: Arc<dyn SettlementService + Send + Sync>,
    transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,
    settlement_timeout: Duration,
}

impl StakingInteractorImpl {
    pub fn new(
        pool_repository: Arc<dyn StakingPoolRepository + Send + Sync>,
        settlement_service: Arc<dyn SettlementService + Send + Sync>,
        transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,
        settlement_timeout: Duration,
    ) -> Self {
        Self {
            pool_repository,
            settlement_service,
            transaction_repository,
            settlement_timeout,
        }
    }

    fn positive_amount(amount_text: Option<&str>) -> Result<Decimal> {
        let amount = amount_text.and_then(try_parse_amount).unwrap_or(Decimal::ZERO);
        if amount <= Decimal::ZERO {
            return Err(DashboardError::InvalidAmount(
                "Please enter a valid amount".to_string(),
            )
            .into());
        }
        Ok(amount)
    }

    async fn record(
        &self,
        pool: &StakingPool,
        action: &StakingAction,
        amount: Decimal,
        status: TransactionStatus,
        hash: String,
    ) {
        let kind = match action {
            StakingAction::Stake(_) => TransactionKind::Stake,
            StakingAction::Unstake(_) => TransactionKind::Unstake,
            StakingAction::Claim => TransactionKind::Claim,
        };
        let token = match action {
            StakingAction::Claim => pool.reward_token.clone(),
            _ => pool.token_symbol.clone(),
        };

        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind,
            status,
            hash,
            timestamp: Utc::now(),
            amount,
            token,
        };

        if let Err(e) = self.transaction_repository.record(transaction).await {
            warn!("Failed to record {} on pool {}: {}", action.label(), pool.id, e);
        }
    }
}

#[async_trait]
impl StakingInteractor for StakingInteractorImpl {
    async fn list_pools(&self) -> Result<Vec<StakingPool>> {
        self.pool_repository.list_pools().await
    }

    async fn get_pool(&self, pool_id: &str) -> Result<StakingPool> {
        self.pool_repository.get_pool(pool_id).await
    }

    async fn validate_action(
        &self,
        pool_id: &str,
        kind: &str,
        amount_text: Option<&str>,
    ) -> Result<StakingAction> {
        let pool = self.pool_repository.get_pool(pool_id).await?;

        match kind {
            "stake" => {
                let amount = Self::positive_amount(amount_text)?;
                if pool.staked_amount.checked_add(amount).is_none() {
                    return Err(
                        DashboardError::InvalidAmount("Amount is too large".to_string()).into(),
                    );
                }
                Ok(StakingAction::Stake(amount))
            }
            "unstake" => {
                let amount = Self::positive_amount(amount_text)?;
                if amount > pool.staked_amount {
                    return Err(DashboardError::InvalidAmount(format!(
                        "Only {} {} is staked in {}",
                        pool.staked_amount.normalize(),
                        pool.token_symbol,
                        pool.name
                    ))
                    .into());
                }
                Ok(StakingAction::Unstake(amount))
            }
            "claim" => {
                if pool.earned_rewards <= Decimal::ZERO {
                    return Err(
                        DashboardError::InvalidAmount("No rewards to claim".to_string()).into(),
                    );
                }
                Ok(StakingAction::Claim)
            }
            other => Err(anyhow::anyhow!("Unsupported staking action: {}", other)),
        }
    }

    async fn execute_action(&self, pool_id: &str, action: StakingAction) -> Result<StakingReceipt> {
        let pool = self.pool_repository.get_pool(pool_id).await?;

        let outcome = match timeout(
            self.settlement_timeout,
            self.settlement_service.settle_staking(&pool, &action),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                error!("{} on pool {} timed out", action.label(), pool.id);
                self.record(&pool, &action, Decimal::ZERO, TransactionStatus::Failed, String::new())
                    .await;
                return Err(DashboardError::Timeout(self.settlement_timeout).into());
            }
        };

        let (tx_hash, amount) = match outcome {
            Ok(SettlementOutcome::Confirmed {
                tx_hash,
                amount_out,
            }) => (tx_hash, amount_out),
            Ok(SettlementOutcome::Reverted { reason }) => {
                error!("{} on pool {} reverted: {}", action.label(), pool.id, reason);
                self.record(&pool, &action, Decimal::ZERO, TransactionStatus::Failed, String::new())
                    .await;
                return Err(DashboardError::SettlementFailed(reason).into());
            }
            Err(e) => {
                error!("{} on pool {} failed: {}", action.label(), pool.id, e);
                self.record(&pool, &action, Decimal::ZERO, TransactionStatus::Failed, String::new())
                    .await;
                return Err(DashboardError::SettlementFailed(e.to_string()).into());
            }
        };

        // Re-read so concurrent updates to this pool are not lost
        let current = self.pool_repository.get_pool(pool_id).await?;
        let (staked, earned) = match action {
            StakingAction::Stake(value) => {
                let staked = current.staked_amount.checked_add(value).ok_or_else(|| {
                    DashboardError::InvalidAmount("Amount is too large".to_string())
                })?;
                (staked, current.earned_rewards)
            }
            StakingAction::Unstake(value) => (
                (current.staked_amount - value).max(Decimal::ZERO),
                current.earned_rewards,
            ),
            StakingAction::Claim => (current.staked_amount, Decimal::ZERO),
        };
        let updated = self
            .pool_repository
            .update_balances(pool_id, staked, earned)
            .await?;

        info!(
            "{} of {} on pool {} confirmed in {}",
            action.label(),
            amount,
            updated.name,
            tx_hash
        );
        self.record(&updated, &action, amount, TransactionStatus::Confirmed, tx_hash.clone())
            .await;

        Ok(StakingReceipt {
            pool: updated,
            action,
            amount,
            tx_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryStakingPoolRepository, InMemoryTransactionRepository};
    use crate::services::settlement_service::testing::FailingSettlementService;
    use crate::services::SimulatedSettlementService;
    use std::str::FromStr;

    fn d(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn interactor_with(
        settlement: Arc<dyn SettlementService + Send + Sync>,
        settlement_timeout: Duration,
    ) -> (StakingInteractorImpl, Arc<InMemoryTransactionRepository>) {
        let transactions = Arc::new(InMemoryTransactionRepository::with_transactions(vec![]));
        let interactor = StakingInteractorImpl::new(
            Arc::new(InMemoryStakingPoolRepository::new()),
            settlement,
            transactions.clone(),
            settlement_timeout,
        );
        (interactor, transactions)
    }

    fn interactor() -> (StakingInteractorImpl, Arc<InMemoryTransactionRepository>) {
        interactor_with(
            Arc::new(SimulatedSettlementService::new(Duration::from_secs(2))),
            Duration::from_secs(30),
        )
    }

    fn is_invalid_amount(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::InvalidAmount(_))
        )
    }

    #[tokio::test]
    async fn test_claim_without_rewards_is_rejected() {
        let (interactor, _) = interactor();
        let err = interactor.validate_action("4", "claim", None).await.unwrap_err();
        assert!(is_invalid_amount(&err));
    }

    #[tokio::test]
    async fn test_stake_requires_positive_amount() {
        let (interactor, _) = interactor();
        for amount in [None, Some(""), Some("0"), Some("-1"), Some("lots")] {
            let err = interactor.validate_action("1", "stake", amount).await.unwrap_err();
            assert!(is_invalid_amount(&err), "amount {:?}", amount);
        }
        assert_eq!(
            interactor.validate_action("1", "stake", Some("0.25")).await.unwrap(),
            StakingAction::Stake(d("0.25"))
        );

        let err = interactor
            .validate_action("1", "stake", Some("79228162514264337593543950335"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount: Amount is too large");
    }

    #[tokio::test]
    async fn test_unstake_is_capped_by_staked_amount() {
        let (interactor, _) = interactor();
        let err = interactor
            .validate_action("3", "unstake", Some("51"))
            .await
            .unwrap_err();
        assert!(is_invalid_amount(&err));
        assert!(interactor.validate_action("3", "unstake", Some("50")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_pool() {
        let (interactor, _) = interactor();
        let err = interactor.validate_action("9", "stake", Some("1")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::UnknownPool(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stake_then_claim_updates_pool() {
        let (interactor, transactions) = interactor();

        let receipt = interactor
            .execute_action("1", StakingAction::Stake(d("0.25")))
            .await
            .unwrap();
        assert_eq!(receipt.pool.staked_amount, d("1.00"));

        let receipt = interactor.execute_action("1", StakingAction::Claim).await.unwrap();
        assert_eq!(receipt.amount, d("0.0034"));
        assert_eq!(receipt.pool.earned_rewards, Decimal::ZERO);

        let err = interactor.validate_action("1", "claim", None).await.unwrap_err();
        assert!(is_invalid_amount(&err));

        let recorded = transactions.recent(10).await.unwrap();
        assert_eq!(recorded.len(), 2);
        assert!(recorded
            .iter()
            .all(|tx| tx.status == TransactionStatus::Confirmed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_settlement_times_out_and_leaves_pool() {
        let (interactor, transactions) = interactor_with(
            Arc::new(SimulatedSettlementService::new(Duration::from_secs(60))),
            Duration::from_secs(5),
        );

        let err = interactor
            .execute_action("3", StakingAction::Stake(d("5")))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::Timeout(after)) if *after == Duration::from_secs(5)
        ));

        let pool = interactor.get_pool("3").await.unwrap();
        assert_eq!(pool.staked_amount, d("50"));
        assert_eq!(
            transactions.recent(1).await.unwrap()[0].status,
            TransactionStatus::Failed
        );
    }

    #[tokio::test]
    async fn test_reverted_action_leaves_pool() {
        let (interactor, transactions) =
            interactor_with(Arc::new(FailingSettlementService::Revert("out of gas")), Duration::from_secs(30));

        let err = interactor.execute_action("1", StakingAction::Claim).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::SettlementFailed(reason)) if reason == "out of gas"
        ));
        assert_eq!(err.to_string(), "Settlement failed: out of gas");

        let pool = interactor.get_pool("1").await.unwrap();
        assert_eq!(pool.earned_rewards, d("0.0034"));
        let recorded = transactions.recent(10).await.unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].status, TransactionStatus::Failed);
        assert_eq!(recorded[0].token, pool.reward_token);
    }

    #[tokio::test]
    async fn test_submission_error_is_settlement_failure() {
        let (interactor, _) = interactor_with(
            Arc::new(FailingSettlementService::Unreachable("rpc unavailable")),
            Duration::from_secs(30),
        );

        let err = interactor
            .execute_action("2", StakingAction::Stake(d("1")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Settlement failed: rpc unavailable");
    }
}
