pub mod notifier;
pub mod portfolio_view;
pub mod staking_view;
pub mod swap_view;
pub mod wallet_view;
