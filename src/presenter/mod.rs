use crate::entity::DashboardError;
use crate::view::notifier::Notifier;
use anyhow::Result;
use log::warn;

pub mod portfolio_presenter;
pub mod staking_presenter;
pub mod swap_presenter;
pub mod wallet_presenter;

/// Shows user-facing errors as a toast and passes everything else up.
pub(crate) async fn notify_rejection(
    notifier: &(dyn Notifier + Send + Sync),
    e: anyhow::Error,
) -> Result<()> {
    match e.downcast_ref::<DashboardError>() {
        Some(dashboard_error) => {
            warn!("Rejected: {}", dashboard_error);
            notifier.error(dashboard_error.to_string()).await;
            Ok(())
        }
        None => Err(e),
    }
}
