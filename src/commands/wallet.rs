use super::{print_usage, CommandHandler};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;

const WALLET_USAGE: &str = "wallet [connect <address> | disconnect | chain <name>]";

pub struct WalletCommand;

impl CommandHandler for WalletCommand {
    fn command_name() -> &'static str {
        "wallet"
    }

    fn description() -> &'static str {
        "show or change the wallet session (connect, disconnect, chain)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let presenter = services.wallet_presenter();

        match args {
            [] => presenter.show_session().await,
            ["connect", address] => presenter.connect(address).await,
            ["disconnect"] => presenter.disconnect().await,
            ["chain", chain @ ..] if !chain.is_empty() => {
                presenter.select_chain(&chain.join(" ")).await
            }
            _ => {
                print_usage(WALLET_USAGE);
                Ok(())
            }
        }
    }
}
