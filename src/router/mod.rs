use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commands::{help, portfolio, staking, swap, wallet, CommandHandler};
use crate::di::ServiceContainer;

/// Whether the prompt should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    async fn dispatch(&self, line: &str) -> Result<Flow>;
}

// Command router implementation
pub struct ConsoleRouter {
    services: Arc<ServiceContainer>,
}

impl ConsoleRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Router for ConsoleRouter {
    async fn dispatch(&self, line: &str) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };
        let command = command.to_lowercase();
        let services = self.services.clone();
        debug!("Dispatching '{}' with {} argument(s)", command, args.len());

        match command.as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => help::HelpCommand::execute(args, services).await?,
            "tokens" => portfolio::TokensCommand::execute(args, services).await?,
            "portfolio" => portfolio::PortfolioCommand::execute(args, services).await?,
            "activity" => portfolio::ActivityCommand::execute(args, services).await?,
            "from" => swap::FromCommand::execute(args, services).await?,
            "to" => swap::ToCommand::execute(args, services).await?,
            "flip" => swap::FlipCommand::execute(args, services).await?,
            "amount" => swap::AmountCommand::execute(args, services).await?,
            "max" => swap::MaxCommand::execute(args, services).await?,
            "slippage" => swap::SlippageCommand::execute(args, services).await?,
            "quote" => swap::QuoteCommand::execute(args, services).await?,
            "swap" => swap::SwapCommand::execute(args, services).await?,
            "confirm" => swap::ConfirmCommand::execute(args, services).await?,
            "cancel" => swap::CancelCommand::execute(args, services).await?,
            "pools" => staking::PoolsCommand::execute(args, services).await?,
            "stake" => staking::StakeCommand::execute(args, services).await?,
            "unstake" => staking::UnstakeCommand::execute(args, services).await?,
            "claim" => staking::ClaimCommand::execute(args, services).await?,
            "wallet" => wallet::WalletCommand::execute(args, services).await?,
            other => println!("Unknown command '{}'. Type 'help' to see the commands.", other),
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::entity::{SwapState, TransactionStatus};
    use crate::services::settlement_service::testing::FailingSettlementService;
    use crate::view::notifier::testing::RecordingNotifier;
    use std::time::Duration;

    async fn router() -> (ConsoleRouter, Arc<ServiceContainer>) {
        let services = Arc::new(ServiceContainer::new(AppConfig::default()).await.unwrap());
        (ConsoleRouter::new(services.clone()), services)
    }

    #[tokio::test]
    async fn test_blank_and_quit() {
        let (router, _) = router().await;
        assert_eq!(router.dispatch("   ").await.unwrap(), Flow::Continue);
        assert_eq!(router.dispatch("nonsense").await.unwrap(), Flow::Continue);
        assert_eq!(router.dispatch("QUIT").await.unwrap(), Flow::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_swap_flow_through_commands() {
        let (router, services) = router().await;
        let presenter = services.swap_presenter();

        router.dispatch("amount 1").await.unwrap();
        router.dispatch("swap").await.unwrap();
        assert!(matches!(
            presenter.state().await,
            SwapState::PendingConfirmation { .. }
        ));

        router.dispatch("confirm").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(presenter.state().await.name(), "settling");

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(presenter.state().await.is_idle());

        let activity = services.transaction_repository().recent(1).await.unwrap();
        assert_eq!(activity[0].token, "ETH");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stake_through_commands() {
        let (router, services) = router().await;

        router.dispatch("stake 3 5").await.unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;

        let pool = services.pool_repository().get_pool("3").await.unwrap();
        assert_eq!(pool.staked_amount, rust_decimal::Decimal::from(55));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_settlement_through_commands() {
        let notifier = Arc::new(RecordingNotifier::default());
        let services = Arc::new(
            ServiceContainer::with_services(
                AppConfig::default(),
                Arc::new(FailingSettlementService::Revert("execution reverted")),
                notifier.clone(),
            )
            .await
            .unwrap(),
        );
        let router = ConsoleRouter::new(services.clone());

        router.dispatch("swap 1 eth usdc").await.unwrap();
        router.dispatch("confirm").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(services.swap_presenter().state().await.is_idle());
        assert_eq!(
            notifier.errors(),
            vec!["Swap of 1 ETH to USDC failed: execution reverted".to_string()]
        );
        let activity = services.transaction_repository().recent(1).await.unwrap();
        assert_eq!(activity[0].status, TransactionStatus::Failed);
    }
}
