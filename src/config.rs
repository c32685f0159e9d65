//! Application settings.
//!
//! Values come from built-in defaults, overridden by `DEFI_HUB_*` environment
//! variables (a `.env` file is loaded by the binary before this runs).
use crate::entity::DashboardError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Simulated network confirmation delay for swaps and staking actions
    pub settlement_delay_ms: u64,

    /// Upper bound on a single settlement before it is reported as timed out
    pub settlement_timeout_ms: u64,

    /// Slippage tolerance the swap form starts with, in percent
    pub default_slippage_percent: Decimal,

    /// Flat network fee shown on every quote
    pub gas_fee: Decimal,

    /// Input amount above which the high price impact tier applies
    pub price_impact_threshold: Decimal,

    pub price_impact_low_percent: Decimal,

    pub price_impact_high_percent: Decimal,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settlement_delay_ms: 2_000,
            settlement_timeout_ms: 30_000,
            default_slippage_percent: Decimal::new(5, 1),
            gas_fee: Decimal::new(5, 3),
            price_impact_threshold: Decimal::from(100),
            price_impact_low_percent: Decimal::new(5, 2),
            price_impact_high_percent: Decimal::new(12, 2),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, DashboardError> {
        let defaults = AppConfig::default();

        let settings = config::Config::builder()
            .set_default("settlement_delay_ms", defaults.settlement_delay_ms)?
            .set_default("settlement_timeout_ms", defaults.settlement_timeout_ms)?
            .set_default(
                "default_slippage_percent",
                defaults.default_slippage_percent.to_string(),
            )?
            .set_default("gas_fee", defaults.gas_fee.to_string())?
            .set_default(
                "price_impact_threshold",
                defaults.price_impact_threshold.to_string(),
            )?
            .set_default(
                "price_impact_low_percent",
                defaults.price_impact_low_percent.to_string(),
            )?
            .set_default(
                "price_impact_high_percent",
                defaults.price_impact_high_percent.to_string(),
            )?
            .add_source(config::Environment::with_prefix("DEFI_HUB").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn settlement_delay(&self) -> Duration {
        Duration::from_millis(self.settlement_delay_ms)
    }

    pub fn settlement_timeout(&self) -> Duration {
        Duration::from_millis(self.settlement_timeout_ms)
    }
}
