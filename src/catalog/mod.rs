pub mod mock_data;
pub mod staking_repository;
pub mod token_repository;
pub mod transaction_repository;

pub use staking_repository::{InMemoryStakingPoolRepository, StakingPoolRepository};
pub use token_repository::{StaticTokenRepository, TokenRepository};
pub use transaction_repository::{InMemoryTransactionRepository, TransactionRepository};
