use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingPool {
    pub id: String,
    pub name: String,
    pub token_symbol: String,
    pub apr: Decimal,
    pub tvl: Decimal,
    pub staked_amount: Decimal,
    pub earned_rewards: Decimal,
    pub lockup_period_days: u32,
    pub reward_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingAction {
    Stake(Decimal),
    Unstake(Decimal),
    Claim,
}

impl StakingAction {
    pub fn label(&self) -> &'static str {
        match self {
            StakingAction::Stake(_) => "stake",
            StakingAction::Unstake(_) => "unstake",
            StakingAction::Claim => "claim",
        }
    }
}

/// In-flight state of a single pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StakingState {
    #[default]
    Idle,
    Acting(StakingAction),
}
