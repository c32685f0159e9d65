use super::{print_usage, CommandHandler};
use crate::di::ServiceContainer;
use crate::presenter::portfolio_presenter::DEFAULT_ACTIVITY_LIMIT;
use anyhow::Result;
use std::sync::Arc;

pub struct TokensCommand;

impl CommandHandler for TokensCommand {
    fn command_name() -> &'static str {
        "tokens"
    }

    fn description() -> &'static str {
        "list the token catalog with prices and balances"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.portfolio_presenter().show_tokens().await
    }
}

pub struct PortfolioCommand;

impl CommandHandler for PortfolioCommand {
    fn command_name() -> &'static str {
        "portfolio"
    }

    fn description() -> &'static str {
        "show total value, 24h change and allocation"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.portfolio_presenter().show_portfolio().await
    }
}

pub struct ActivityCommand;

impl CommandHandler for ActivityCommand {
    fn command_name() -> &'static str {
        "activity"
    }

    fn description() -> &'static str {
        "show recent transactions (format: activity [limit])"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let limit = match args.first() {
            Some(value) => match value.parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    print_usage("activity [limit]");
                    return Ok(());
                }
            },
            None => DEFAULT_ACTIVITY_LIMIT,
        };

        services.portfolio_presenter().show_activity(limit).await
    }
}
