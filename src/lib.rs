//! DeFi Hub - a console dashboard for swapping and staking EVM tokens
//!
//! Quotes come from a static price catalog, settlement is simulated, and
//! staking positions live in memory for the lifetime of the process.
pub mod catalog;
pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod services;
pub mod utils;
pub mod view;

use anyhow::Result;
use std::sync::Arc;

// Re-export commonly used items
pub use config::AppConfig;
pub use di::ServiceContainer;
pub use entity::*;
pub use router::{ConsoleRouter, Flow, Router};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wires the container and the command router for the given configuration
pub async fn create_application(config: AppConfig) -> Result<(ConsoleRouter, Arc<ServiceContainer>)> {
    let services = Arc::new(ServiceContainer::new(config).await?);
    let router = ConsoleRouter::new(services.clone());
    Ok((router, services))
}
