use crate::entity::{StakingAction, StakingPool};
use crate::utils::format_tvl;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait StakingView: Send + Sync {
    async fn display_pools(&self, pools: &[StakingPool]) -> Result<()>;
    async fn display_acting(&self, pool: &StakingPool, action: &StakingAction) -> Result<()>;
}

fn lockup_text(days: u32) -> String {
    if days == 0 {
        "Flexible".to_string()
    } else {
        format!("{} days", days)
    }
}

pub fn render_pool(pool: &StakingPool) -> String {
    format!(
        "[{}] {} - APR {}% | TVL {} | Lockup {}\n    Staked: {} {} | Earned: {} {}",
        pool.id,
        pool.name,
        pool.apr.normalize(),
        format_tvl(pool.tvl),
        lockup_text(pool.lockup_period_days),
        pool.staked_amount.normalize(),
        pool.token_symbol,
        pool.earned_rewards.normalize(),
        pool.reward_token,
    )
}

pub struct ConsoleStakingView;

impl ConsoleStakingView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleStakingView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StakingView for ConsoleStakingView {
    async fn display_pools(&self, pools: &[StakingPool]) -> Result<()> {
        println!("Staking pools:");
        for pool in pools {
            println!("{}", render_pool(pool));
        }
        Ok(())
    }

    async fn display_acting(&self, pool: &StakingPool, action: &StakingAction) -> Result<()> {
        let text = match action {
            StakingAction::Stake(amount) => {
                format!("Staking {} {}...", amount.normalize(), pool.token_symbol)
            }
            StakingAction::Unstake(amount) => {
                format!("Unstaking {} {}...", amount.normalize(), pool.token_symbol)
            }
            StakingAction::Claim => format!(
                "Claiming {} {}...",
                pool.earned_rewards.normalize(),
                pool.reward_token
            ),
        };
        println!("{}", text);
        Ok(())
    }
}
