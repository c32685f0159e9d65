use super::{register_commands, CommandHandler};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;

pub struct HelpCommand;

pub fn render_help() -> String {
    let mut text = String::from("Available commands:\n");
    for (name, description) in register_commands() {
        text.push_str(&format!("  {:<10} {}\n", name, description));
    }
    text
}

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(_args: &[&str], _services: Arc<ServiceContainer>) -> Result<()> {
        print!("{}", render_help());
        Ok(())
    }
}
