use crate::entity::{PortfolioSummary, Token, Transaction};
use crate::utils::{format_percent_change, format_usd};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PortfolioView: Send + Sync {
    async fn display_tokens(&self, tokens: &[Token]) -> Result<()>;
    async fn display_summary(&self, summary: &PortfolioSummary) -> Result<()>;
    async fn display_activity(&self, transactions: &[Transaction]) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub fn render_token(token: &Token) -> String {
    format!(
        "{:<5} {:<16} {:>10} {:>8}  bal {} ({})",
        token.symbol,
        token.name,
        format_usd(token.price),
        format_percent_change(token.price_change_24h),
        token.balance_or_zero().normalize(),
        format_usd(token.balance_value()),
    )
}

pub fn render_summary(summary: &PortfolioSummary) -> String {
    let sign = if summary.change_value_24h.is_sign_negative() { "-" } else { "+" };
    let mut text = format!(
        "Total Portfolio Value: {}\n24h: {} ({}{})\nAllocation:",
        format_usd(summary.total_value),
        format_percent_change(summary.change_percent_24h),
        sign,
        format_usd(summary.change_value_24h.abs()),
    );
    for entry in &summary.allocation {
        text.push_str(&format!(
            "\n  {:<5} {:>12} {:>5}%",
            entry.token,
            format_usd(entry.value),
            entry.percentage
        ));
    }
    text
}

pub fn render_transaction(transaction: &Transaction) -> String {
    format!(
        "{} {:<8} {} {} [{}] {}",
        transaction.timestamp.format("%Y-%m-%d %H:%M"),
        transaction.kind.to_string(),
        transaction.amount.normalize(),
        transaction.token,
        transaction.status,
        if transaction.hash.is_empty() { "-" } else { transaction.hash.as_str() },
    )
}

pub struct ConsolePortfolioView;

impl ConsolePortfolioView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioView for ConsolePortfolioView {
    async fn display_tokens(&self, tokens: &[Token]) -> Result<()> {
        println!("Tokens:");
        for token in tokens {
            println!("{}", render_token(token));
        }
        Ok(())
    }

    async fn display_summary(&self, summary: &PortfolioSummary) -> Result<()> {
        println!("{}", render_summary(summary));
        Ok(())
    }

    async fn display_activity(&self, transactions: &[Transaction]) -> Result<()> {
        if transactions.is_empty() {
            println!("No recent transactions.");
            return Ok(());
        }

        println!("Recent activity:");
        for transaction in transactions {
            println!("{}", render_transaction(transaction));
        }
        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        println!("❌ Error loading portfolio: {}", error_message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_data;
    use crate::interactor::portfolio_interactor::summarize;

    #[test]
    fn test_render_token() {
        let tokens = mock_data::tokens();
        let text = render_token(&tokens[0]);
        assert!(text.starts_with("ETH   Ethereum"));
        assert!(text.contains("$2345.67"));
        assert!(text.contains("+2.45%"));
        assert!(text.ends_with("bal 1.5 ($3518.51)"));
    }

    #[test]
    fn test_render_summary() {
        let summary = summarize(&mock_data::tokens());
        let text = render_summary(&summary);
        assert!(text.starts_with("Total Portfolio Value: $17016.01"));
        assert!(text.contains("USDC"));
    }
}
