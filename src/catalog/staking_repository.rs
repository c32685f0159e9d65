use crate::catalog::mock_data;
use crate::entity::{DashboardError, StakingPool};
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

/// Staking pool records. Each pool is an independent record.
#[async_trait]
pub trait StakingPoolRepository: Send + Sync {
    async fn get_pool(&self, pool_id: &str) -> Result<StakingPool>;

    async fn list_pools(&self) -> Result<Vec<StakingPool>>;

    /// Overwrite the staked amount and earned rewards of a pool
    async fn update_balances(
        &self,
        pool_id: &str,
        staked_amount: Decimal,
        earned_rewards: Decimal,
    ) -> Result<StakingPool>;
}

pub struct InMemoryStakingPoolRepository {
    pools: RwLock<Vec<StakingPool>>,
}

impl InMemoryStakingPoolRepository {
    pub fn new() -> Self {
        Self::with_pools(mock_data::staking_pools())
    }

    pub fn with_pools(pools: Vec<StakingPool>) -> Self {
        Self {
            pools: RwLock::new(pools),
        }
    }
}

impl Default for InMemoryStakingPoolRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StakingPoolRepository for InMemoryStakingPoolRepository {
    async fn get_pool(&self, pool_id: &str) -> Result<StakingPool> {
        let pools = self.pools.read().await;
        pools
            .iter()
            .find(|pool| pool.id == pool_id)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownPool(pool_id.to_string()).into())
    }

    async fn list_pools(&self) -> Result<Vec<StakingPool>> {
        Ok(self.pools.read().await.clone())
    }

    async fn update_balances(
        &self,
        pool_id: &str,
        staked_amount: Decimal,
        earned_rewards: Decimal,
    ) -> Result<StakingPool> {
        let mut pools = self.pools.write().await;
        let pool = pools
            .iter_mut()
            .find(|pool| pool.id == pool_id)
            .ok_or_else(|| DashboardError::UnknownPool(pool_id.to_string()))?;

        pool.staked_amount = staked_amount;
        pool.earned_rewards = earned_rewards;
        info!(
            "Pool {} updated: staked={}, earned={}",
            pool.id, pool.staked_amount, pool.earned_rewards
        );

        Ok(pool.clone())
    }
}
