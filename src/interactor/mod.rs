pub mod portfolio_interactor;
pub mod quote_interactor;
pub mod staking_interactor;
pub mod swap_interactor;
pub mod wallet_interactor;
