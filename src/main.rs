//! DeFi Hub - Main executable
//!
//! Reads commands from standard input and drives the swap, staking,
//! portfolio and wallet flows of the dashboard.
use anyhow::Context;
use defi_hub::{AppConfig, Flow, Router};
use dotenv::dotenv;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting DeFi Hub v{}", defi_hub::VERSION);

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    info!("Initializing dashboard...");
    let (router, services) = defi_hub::create_application(config)
        .await
        .context("Failed to initialize the dashboard")?;

    services.portfolio_presenter().show_portfolio().await?;
    services.swap_presenter().show_form().await?;
    println!("Type 'help' to see the commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };

                match router.dispatch(&line).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) => error!("Command failed: {:#}", e),
                }
            }
        }
    }

    info!("DeFi Hub stopped");
    Ok(())
}
