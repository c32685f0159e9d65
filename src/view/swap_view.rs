use crate::entity::{Quote, SwapForm, SwapIntent};
use crate::utils::{format_amount, format_usd};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

// Gas is paid in the native token of the default chain
const GAS_TOKEN_SYMBOL: &str = "ETH";

#[async_trait]
pub trait SwapView: Send + Sync {
    async fn display_usage(&self) -> Result<()>;
    async fn display_form(&self, form: &SwapForm, quote: &Quote) -> Result<()>;
    async fn display_confirmation(&self, intent: &SwapIntent) -> Result<()>;
    async fn display_settling(&self, intent: &SwapIntent) -> Result<()>;
    async fn display_cancelled(&self, intent: &SwapIntent) -> Result<()>;
}

fn balance_text(balance: Option<Decimal>) -> String {
    balance
        .map(|b| b.normalize().to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_form(form: &SwapForm, quote: &Quote) -> String {
    let mut text = format!(
        "Swap (slippage {}%)\n\
         From: {} {}   Balance: {} {}\n\
         To:   {} {}   Balance: {} {}\n\
         ≈ {} -> ≈ {}",
        form.slippage_percent.normalize(),
        if form.input_amount.is_empty() { "0.0" } else { form.input_amount.as_str() },
        form.input_token.symbol,
        balance_text(form.input_token.balance),
        form.input_token.symbol,
        if quote.output_amount.is_empty() { "0.0" } else { quote.output_amount.as_str() },
        form.output_token.symbol,
        balance_text(form.output_token.balance),
        form.output_token.symbol,
        format_usd(quote.input_value_usd),
        format_usd(quote.output_value_usd),
    );

    if quote.out_of_range {
        text.push_str("\nAmount is too large to quote");
    }

    if !quote.is_empty() && quote.input_value_usd > Decimal::ZERO {
        text.push_str(&format!(
            "\nRate: 1 {} = {} {}\nPrice impact: {}%\nNetwork fee: ~{} {}",
            form.input_token.symbol,
            quote.exchange_rate,
            form.output_token.symbol,
            quote.price_impact_percent.normalize(),
            quote.estimated_gas_fee.normalize(),
            GAS_TOKEN_SYMBOL,
        ));
    }

    text
}

pub fn render_confirmation(intent: &SwapIntent) -> String {
    format!(
        "Confirm Swap\n\
         You pay:     {} {}\n\
         You receive: {} {}\n\
         Rate: 1 {} = {} {}\n\
         Price impact: {}%\n\
         Slippage tolerance: {}%\n\
         Output is estimated. You will receive at least {} {} or the transaction will revert.\n\
         Type 'confirm' to proceed or 'cancel' to go back.",
        intent.input_amount.normalize(),
        intent.input_token.symbol,
        intent.quote.output_amount,
        intent.output_token.symbol,
        intent.input_token.symbol,
        intent.quote.exchange_rate,
        intent.output_token.symbol,
        intent.quote.price_impact_percent.normalize(),
        intent.slippage_percent.normalize(),
        format_amount(intent.minimum_received),
        intent.output_token.symbol,
    )
}

pub struct ConsoleSwapView;

impl ConsoleSwapView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSwapView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapView for ConsoleSwapView {
    async fn display_usage(&self) -> Result<()> {
        println!(
            "Use the command in this format: swap <amount> <source_token> <target_token> [<slippage>%]\n\
             Example: swap 1.5 ETH USDC 0.5%\n\
             Or fill the form with 'from', 'to', 'amount' and run 'swap' on its own."
        );
        Ok(())
    }

    async fn display_form(&self, form: &SwapForm, quote: &Quote) -> Result<()> {
        println!("{}", render_form(form, quote));
        Ok(())
    }

    async fn display_confirmation(&self, intent: &SwapIntent) -> Result<()> {
        println!("{}", render_confirmation(intent));
        Ok(())
    }

    async fn display_settling(&self, intent: &SwapIntent) -> Result<()> {
        println!(
            "Swapping {} {} for {} {}...",
            intent.input_amount.normalize(),
            intent.input_token.symbol,
            intent.quote.output_amount,
            intent.output_token.symbol
        );
        Ok(())
    }

    async fn display_cancelled(&self, intent: &SwapIntent) -> Result<()> {
        println!(
            "Swap of {} {} cancelled.",
            intent.input_amount.normalize(),
            intent.input_token.symbol
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticTokenRepository;
    use crate::catalog::TokenRepository;
    use crate::interactor::quote_interactor::{calculate_quote, minimum_received, QuoteParams};
    use chrono::Utc;
    use uuid::Uuid;

    async fn form(amount: &str) -> SwapForm {
        let tokens = StaticTokenRepository::new();
        let mut form = SwapForm::new(
            tokens.get_token_by_symbol("ETH").await.unwrap(),
            tokens.get_token_by_symbol("USDC").await.unwrap(),
            Decimal::new(5, 1),
        );
        form.input_amount = amount.to_string();
        form
    }

    #[tokio::test]
    async fn test_form_shows_rate_only_with_amount() {
        let empty = form("").await;
        let quote = calculate_quote(&empty.input_token, &empty.output_token, "", &QuoteParams::default());
        let text = render_form(&empty, &quote);
        assert!(text.contains("From: 0.0 ETH   Balance: 1.5 ETH"));
        assert!(!text.contains("Rate:"));

        let filled = form("1").await;
        let quote = calculate_quote(&filled.input_token, &filled.output_token, "1", &QuoteParams::default());
        let text = render_form(&filled, &quote);
        assert!(text.contains("To:   2345.670000 USDC"));
        assert!(text.contains("Rate: 1 ETH = 2345.670000 USDC"));
        assert!(text.contains("Price impact: 0.05%"));
        assert!(text.contains("≈ $2345.67 -> ≈ $2345.67"));
    }

    #[tokio::test]
    async fn test_oversized_amount_is_flagged() {
        let form = form("10000000000000000000000").await;
        let quote = calculate_quote(&form.input_token, &form.output_token, &form.input_amount, &QuoteParams::default());
        let text = render_form(&form, &quote);
        assert!(text.contains("To:   0.0 USDC"));
        assert!(text.contains("Amount is too large to quote"));
        assert!(!text.contains("Rate:"));
    }

    #[tokio::test]
    async fn test_confirmation_shows_minimum_received() {
        let form = form("1").await;
        let quote = calculate_quote(&form.input_token, &form.output_token, "1", &QuoteParams::default());
        let output = Decimal::new(234567, 2);
        let intent = SwapIntent {
            id: Uuid::new_v4(),
            input_token: form.input_token.clone(),
            output_token: form.output_token.clone(),
            input_amount: Decimal::ONE,
            output_amount: output,
            slippage_percent: form.slippage_percent,
            minimum_received: minimum_received(output, form.slippage_percent),
            quote,
            created_at: Utc::now(),
        };

        let text = render_confirmation(&intent);
        assert!(text.contains("You will receive at least 2333.941650 USDC"));
        assert!(text.contains("Slippage tolerance: 0.5%"));
    }
}
