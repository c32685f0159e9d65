use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Source and target tokens must be different")]
    SameToken,

    #[error("Unknown staking pool: {0}")]
    UnknownPool(String),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    #[error("Another action is already in progress for {0}")]
    ActionInProgress(String),

    #[error("Settlement failed: {0}")]
    SettlementFailed(String),

    #[error("Settlement timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
