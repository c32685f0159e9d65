use anyhow::Result;
use log::error;
use std::sync::Arc;

use super::{print_usage, CommandHandler};
use crate::di::ServiceContainer;
use crate::entity::SwapSide;

pub struct FromCommand;

impl CommandHandler for FromCommand {
    fn command_name() -> &'static str {
        "from"
    }

    fn description() -> &'static str {
        "choose the token to pay with (format: from <symbol>)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        match args.first() {
            Some(symbol) => {
                services
                    .swap_presenter()
                    .select_token(SwapSide::From, symbol)
                    .await
            }
            None => {
                print_usage("from <symbol>");
                Ok(())
            }
        }
    }
}

pub struct ToCommand;

impl CommandHandler for ToCommand {
    fn command_name() -> &'static str {
        "to"
    }

    fn description() -> &'static str {
        "choose the token to receive (format: to <symbol>)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        match args.first() {
            Some(symbol) => {
                services
                    .swap_presenter()
                    .select_token(SwapSide::To, symbol)
                    .await
            }
            None => {
                print_usage("to <symbol>");
                Ok(())
            }
        }
    }
}

pub struct FlipCommand;

impl CommandHandler for FlipCommand {
    fn command_name() -> &'static str {
        "flip"
    }

    fn description() -> &'static str {
        "switch the pay and receive tokens"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.swap_presenter().switch_tokens().await
    }
}

pub struct AmountCommand;

impl CommandHandler for AmountCommand {
    fn command_name() -> &'static str {
        "amount"
    }

    fn description() -> &'static str {
        "set the amount to pay (format: amount <value>)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        // No argument clears the field
        let amount = args.first().copied().unwrap_or("");
        services.swap_presenter().set_input_amount(amount).await
    }
}

pub struct MaxCommand;

impl CommandHandler for MaxCommand {
    fn command_name() -> &'static str {
        "max"
    }

    fn description() -> &'static str {
        "pay with the full balance of the selected token"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.swap_presenter().set_max_amount().await
    }
}

pub struct SlippageCommand;

impl CommandHandler for SlippageCommand {
    fn command_name() -> &'static str {
        "slippage"
    }

    fn description() -> &'static str {
        "set the slippage tolerance (format: slippage <percent>%)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        match args.first() {
            Some(value) => services.swap_presenter().set_slippage(value).await,
            None => {
                print_usage("slippage <percent>%");
                Ok(())
            }
        }
    }
}

pub struct QuoteCommand;

impl CommandHandler for QuoteCommand {
    fn command_name() -> &'static str {
        "quote"
    }

    fn description() -> &'static str {
        "show the swap form with the current quote"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.swap_presenter().show_form().await
    }
}

pub struct SwapCommand;

impl CommandHandler for SwapCommand {
    fn command_name() -> &'static str {
        "swap"
    }

    fn description() -> &'static str {
        "review the swap (format: swap [amount from_token to_token slippage%])"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let mut command_parts = vec![Self::command_name()];
        command_parts.extend_from_slice(args);

        services
            .swap_presenter()
            .process_swap_command(command_parts)
            .await
    }
}

pub struct ConfirmCommand;

impl CommandHandler for ConfirmCommand {
    fn command_name() -> &'static str {
        "confirm"
    }

    fn description() -> &'static str {
        "submit the swap under review"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let presenter = services.swap_presenter();

        // Settlement runs in the background so the prompt stays responsive
        tokio::spawn(async move {
            if let Err(e) = presenter.confirm().await {
                error!("Swap settlement failed: {}", e);
            }
        });

        Ok(())
    }
}

pub struct CancelCommand;

impl CommandHandler for CancelCommand {
    fn command_name() -> &'static str {
        "cancel"
    }

    fn description() -> &'static str {
        "discard the swap under review"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.swap_presenter().cancel().await
    }
}
