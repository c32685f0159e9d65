use crate::entity::{StakingAction, StakingPool, SwapIntent};
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

/// What the network reported for a submitted action.
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementOutcome {
    Confirmed { tx_hash: String, amount_out: Decimal },
    Reverted { reason: String },
}

/// Submits swaps and staking actions and waits for their confirmation.
#[async_trait]
pub trait SettlementService: Send + Sync {
    async fn settle_swap(&self, intent: &SwapIntent) -> Result<SettlementOutcome>;

    async fn settle_staking(
        &self,
        pool: &StakingPool,
        action: &StakingAction,
    ) -> Result<SettlementOutcome>;
}

/// Confirms everything after a fixed delay at exactly the quoted amounts.
pub struct SimulatedSettlementService {
    delay: Duration,
}

impl SimulatedSettlementService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn tx_hash() -> String {
        format!("0x{}", Uuid::new_v4().simple())
    }
}

#[async_trait]
impl SettlementService for SimulatedSettlementService {
    async fn settle_swap(&self, intent: &SwapIntent) -> Result<SettlementOutcome> {
        info!(
            "Submitting swap {}: {} {} -> {} {}",
            intent.id,
            intent.input_amount,
            intent.input_token.symbol,
            intent.output_amount,
            intent.output_token.symbol
        );
        sleep(self.delay).await;

        Ok(SettlementOutcome::Confirmed {
            tx_hash: Self::tx_hash(),
            amount_out: intent.output_amount,
        })
    }

    async fn settle_staking(
        &self,
        pool: &StakingPool,
        action: &StakingAction,
    ) -> Result<SettlementOutcome> {
        info!("Submitting {} on pool {}", action.label(), pool.name);
        sleep(self.delay).await;

        let amount_out = match action {
            StakingAction::Stake(amount) | StakingAction::Unstake(amount) => *amount,
            StakingAction::Claim => pool.earned_rewards,
        };

        Ok(SettlementOutcome::Confirmed {
            tx_hash: Self::tx_hash(),
            amount_out,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use anyhow::anyhow;

    /// Settles nothing: either reverts on chain or fails to submit.
    pub enum FailingSettlementService {
        Revert(&'static str),
        Unreachable(&'static str),
    }

    impl FailingSettlementService {
        fn outcome(&self) -> Result<SettlementOutcome> {
            match self {
                Self::Revert(reason) => Ok(SettlementOutcome::Reverted {
                    reason: reason.to_string(),
                }),
                Self::Unreachable(message) => Err(anyhow!(*message)),
            }
        }
    }

    #[async_trait]
    impl SettlementService for FailingSettlementService {
        async fn settle_swap(&self, _intent: &SwapIntent) -> Result<SettlementOutcome> {
            self.outcome()
        }

        async fn settle_staking(
            &self,
            _pool: &StakingPool,
            _action: &StakingAction,
        ) -> Result<SettlementOutcome> {
            self.outcome()
        }
    }
}
