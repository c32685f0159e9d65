mod dashboard_error;
mod portfolio;
mod quote;
mod staking_pool;
mod state;
mod swap_form;
mod swap_intent;
mod swap_result;
mod token;
mod transaction;
mod wallet;

pub use dashboard_error::DashboardError;
pub use portfolio::{AllocationEntry, Holding, PortfolioSummary};
pub use quote::Quote;
pub use staking_pool::{StakingAction, StakingPool, StakingState};
pub use state::SwapState;
pub use swap_form::{SwapForm, SwapSide};
pub use swap_intent::SwapIntent;
pub use swap_result::{RejectionReason, SwapResult};
pub use token::Token;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use wallet::{Chain, WalletSession};
