use anyhow::Result;
use std::sync::Arc;

use crate::di::ServiceContainer;

pub mod help;
pub mod portfolio;
pub mod staking;
pub mod swap;
pub mod wallet;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command. `args` excludes the command name.
    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()>;
}

pub(crate) fn print_usage(usage: &str) {
    println!("Usage: {}", usage);
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
        (
            portfolio::TokensCommand::command_name(),
            portfolio::TokensCommand::description(),
        ),
        (
            portfolio::PortfolioCommand::command_name(),
            portfolio::PortfolioCommand::description(),
        ),
        (
            portfolio::ActivityCommand::command_name(),
            portfolio::ActivityCommand::description(),
        ),
        (
            swap::FromCommand::command_name(),
            swap::FromCommand::description(),
        ),
        (swap::ToCommand::command_name(), swap::ToCommand::description()),
        (
            swap::FlipCommand::command_name(),
            swap::FlipCommand::description(),
        ),
        (
            swap::AmountCommand::command_name(),
            swap::AmountCommand::description(),
        ),
        (
            swap::MaxCommand::command_name(),
            swap::MaxCommand::description(),
        ),
        (
            swap::SlippageCommand::command_name(),
            swap::SlippageCommand::description(),
        ),
        (
            swap::QuoteCommand::command_name(),
            swap::QuoteCommand::description(),
        ),
        (
            swap::SwapCommand::command_name(),
            swap::SwapCommand::description(),
        ),
        (
            swap::ConfirmCommand::command_name(),
            swap::ConfirmCommand::description(),
        ),
        (
            swap::CancelCommand::command_name(),
            swap::CancelCommand::description(),
        ),
        (
            staking::PoolsCommand::command_name(),
            staking::PoolsCommand::description(),
        ),
        (
            staking::StakeCommand::command_name(),
            staking::StakeCommand::description(),
        ),
        (
            staking::UnstakeCommand::command_name(),
            staking::UnstakeCommand::description(),
        ),
        (
            staking::ClaimCommand::command_name(),
            staking::ClaimCommand::description(),
        ),
        (
            wallet::WalletCommand::command_name(),
            wallet::WalletCommand::description(),
        ),
        ("quit", "leave the dashboard"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_command_names_are_unique() {
        let commands = register_commands();
        let names: HashSet<_> = commands.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), commands.len());
        assert!(names.contains("swap"));
        assert!(names.contains("claim"));
    }
}
