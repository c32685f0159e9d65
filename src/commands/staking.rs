use anyhow::Result;
use log::error;
use std::sync::Arc;

use super::{print_usage, CommandHandler};
use crate::di::ServiceContainer;

pub struct PoolsCommand;

impl CommandHandler for PoolsCommand {
    fn command_name() -> &'static str {
        "pools"
    }

    fn description() -> &'static str {
        "list staking pools with your positions"
    }

    async fn execute(_args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        services.staking_presenter().show_pools().await
    }
}

pub struct StakeCommand;

impl CommandHandler for StakeCommand {
    fn command_name() -> &'static str {
        "stake"
    }

    fn description() -> &'static str {
        "stake into a pool (format: stake <pool_id> <amount>)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let [pool_id, amount] = args else {
            print_usage("stake <pool_id> <amount>");
            return Ok(());
        };
        let (pool_id, amount) = (pool_id.to_string(), amount.to_string());
        let presenter = services.staking_presenter();

        tokio::spawn(async move {
            if let Err(e) = presenter.stake(&pool_id, &amount).await {
                error!("Stake on pool {} failed: {}", pool_id, e);
            }
        });
        Ok(())
    }
}

pub struct UnstakeCommand;

impl CommandHandler for UnstakeCommand {
    fn command_name() -> &'static str {
        "unstake"
    }

    fn description() -> &'static str {
        "withdraw a staked amount (format: unstake <pool_id> <amount>)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let [pool_id, amount] = args else {
            print_usage("unstake <pool_id> <amount>");
            return Ok(());
        };
        let (pool_id, amount) = (pool_id.to_string(), amount.to_string());
        let presenter = services.staking_presenter();

        tokio::spawn(async move {
            if let Err(e) = presenter.unstake(&pool_id, &amount).await {
                error!("Unstake on pool {} failed: {}", pool_id, e);
            }
        });
        Ok(())
    }
}

pub struct ClaimCommand;

impl CommandHandler for ClaimCommand {
    fn command_name() -> &'static str {
        "claim"
    }

    fn description() -> &'static str {
        "claim earned rewards (format: claim <pool_id>)"
    }

    async fn execute(args: &[&str], services: Arc<ServiceContainer>) -> Result<()> {
        let [pool_id] = args else {
            print_usage("claim <pool_id>");
            return Ok(());
        };
        let pool_id = pool_id.to_string();
        let presenter = services.staking_presenter();

        tokio::spawn(async move {
            if let Err(e) = presenter.claim(&pool_id).await {
                error!("Claim on pool {} failed: {}", pool_id, e);
            }
        });
        Ok(())
    }
}
