use crate::catalog::TokenRepository;
use crate::config::AppConfig;
use crate::entity::{Quote, Token};
use crate::utils::{format_amount, parse_amount, try_format_fixed, AMOUNT_DECIMALS};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Inputs of the quote heuristics that are not part of the swap form.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteParams {
    pub gas_fee: Decimal,
    pub price_impact_threshold: Decimal,
    pub price_impact_low_percent: Decimal,
    pub price_impact_high_percent: Decimal,
}

impl QuoteParams {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            gas_fee: config.gas_fee,
            price_impact_threshold: config.price_impact_threshold,
            price_impact_low_percent: config.price_impact_low_percent,
            price_impact_high_percent: config.price_impact_high_percent,
        }
    }
}

impl Default for QuoteParams {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Units of `output_token` paid per unit of `input_token`.
pub fn exchange_rate(input_token: &Token, output_token: &Token) -> Decimal {
    input_token
        .price
        .checked_div(output_token.price)
        .unwrap_or(Decimal::ZERO)
}

/// Derives the quote for the given form values.
///
/// Never fails: non-numeric or negative input counts as zero, and an empty
/// input produces an empty output amount. Price impact is a two-tier
/// approximation on the input size, not a liquidity model. An input whose
/// output or USD values do not fit the decimal range yields an empty output
/// with `out_of_range` set.
pub fn calculate_quote(
    input_token: &Token,
    output_token: &Token,
    input_amount: &str,
    params: &QuoteParams,
) -> Quote {
    let amount = parse_amount(input_amount).max(Decimal::ZERO);
    let rate = exchange_rate(input_token, output_token);

    let price_impact_percent = if amount > params.price_impact_threshold {
        params.price_impact_high_percent
    } else {
        params.price_impact_low_percent
    };

    let priced = amount.checked_mul(rate).and_then(|output| {
        let output_amount = try_format_fixed(output, AMOUNT_DECIMALS)?;
        let output_value = parse_amount(&output_amount).checked_mul(output_token.price)?;
        let input_value = amount.checked_mul(input_token.price)?;
        Some((output_amount, input_value, output_value))
    });

    let (output_amount, input_value_usd, output_value_usd, out_of_range) = match priced {
        Some(_) if input_amount.trim().is_empty() => {
            (String::new(), Decimal::ZERO, Decimal::ZERO, false)
        }
        Some((output_amount, input_value, output_value)) => {
            (output_amount, input_value, output_value, false)
        }
        None => (String::new(), Decimal::ZERO, Decimal::ZERO, true),
    };

    Quote {
        input_token: input_token.clone(),
        output_token: output_token.clone(),
        input_amount: input_amount.to_string(),
        output_amount,
        exchange_rate: format_amount(rate),
        price_impact_percent,
        estimated_gas_fee: params.gas_fee,
        input_value_usd,
        output_value_usd,
        out_of_range,
    }
}

/// Smallest output accepted at settlement for the given slippage tolerance.
pub fn minimum_received(output_amount: Decimal, slippage_percent: Decimal) -> Decimal {
    let factor = Decimal::ONE - slippage_percent / Decimal::ONE_HUNDRED;
    (output_amount * factor).round_dp(AMOUNT_DECIMALS)
}

#[async_trait]
pub trait QuoteInteractor: Send + Sync {
    async fn find_token(&self, symbol: &str) -> Result<Token>;

    fn calculate(&self, input_token: &Token, output_token: &Token, input_amount: &str) -> Quote;

    async fn get_quote(
        &self,
        input_symbol: &str,
        output_symbol: &str,
        input_amount: &str,
    ) -> Result<Quote>;
}

pub struct QuoteInteractorImpl {
    token_repository: Arc<dyn TokenRepository + Send + Sync>,
    params: QuoteParams,
}

impl QuoteInteractorImpl {
    pub fn new(token_repository: Arc<dyn TokenRepository + Send + Sync>, params: QuoteParams) -> Self {
        Self {
            token_repository,
            params,
        }
    }
}

#[async_trait]
impl QuoteInteractor for QuoteInteractorImpl {
    async fn find_token(&self, symbol: &str) -> Result<Token> {
        self.token_repository.get_token_by_symbol(symbol).await
    }

    fn calculate(&self, input_token: &Token, output_token: &Token, input_amount: &str) -> Quote {
        let quote = calculate_quote(input_token, output_token, input_amount, &self.params);
        debug!(
            "Quote {} {} -> {} {} (rate {}, impact {}%)",
            input_amount,
            input_token.symbol,
            quote.output_amount,
            output_token.symbol,
            quote.exchange_rate,
            quote.price_impact_percent
        );
        quote
    }

    async fn get_quote(
        &self,
        input_symbol: &str,
        output_symbol: &str,
        input_amount: &str,
    ) -> Result<Quote> {
        let input_token = self.find_token(input_symbol).await?;
        let output_token = self.find_token(output_symbol).await?;

        Ok(self.calculate(&input_token, &output_token, input_amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticTokenRepository;
    use crate::entity::DashboardError;
    use std::str::FromStr;

    fn d(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn interactor() -> QuoteInteractorImpl {
        QuoteInteractorImpl::new(Arc::new(StaticTokenRepository::new()), QuoteParams::default())
    }

    #[tokio::test]
    async fn test_eth_to_usdc_quote() {
        let quote = interactor().get_quote("ETH", "USDC", "1").await.unwrap();
        assert_eq!(quote.output_amount, "2345.670000");
        assert_eq!(quote.exchange_rate, "2345.670000");
        assert_eq!(quote.estimated_gas_fee, d("0.005"));
        assert_eq!(quote.input_value_usd, d("2345.67"));
    }

    #[tokio::test]
    async fn test_output_matches_price_ratio() {
        let interactor = interactor();
        for (from, to, amount) in [("LINK", "UNI", "3.3"), ("WBTC", "ETH", "0.05"), ("USDC", "AAVE", "250")] {
            let quote = interactor.get_quote(from, to, amount).await.unwrap();
            let expected = d(amount) * quote.input_token.price / quote.output_token.price;
            let actual = d(&quote.output_amount);
            assert!((actual - expected).abs() <= d("0.0000005"), "{} {} -> {}", amount, from, to);
        }
    }

    #[tokio::test]
    async fn test_price_impact_tiers() {
        let interactor = interactor();
        let large = interactor.get_quote("USDC", "DAI", "150").await.unwrap();
        assert_eq!(large.price_impact_percent, d("0.12"));

        let small = interactor.get_quote("USDC", "DAI", "50").await.unwrap();
        assert_eq!(small.price_impact_percent, d("0.05"));

        let boundary = interactor.get_quote("USDC", "DAI", "100").await.unwrap();
        assert_eq!(boundary.price_impact_percent, d("0.05"));
    }

    #[tokio::test]
    async fn test_empty_and_invalid_input() {
        let interactor = interactor();
        let empty = interactor.get_quote("ETH", "USDC", "").await.unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.exchange_rate, "2345.670000");

        let garbage = interactor.get_quote("ETH", "USDC", "abc").await.unwrap();
        assert_eq!(garbage.output_amount, "0.000000");
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let err = interactor().get_quote("ETH", "PEPE", "1").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::UnknownToken(_))
        ));
    }

    #[tokio::test]
    async fn test_oversized_input_is_out_of_range() {
        let interactor = interactor();
        for amount in ["10000000000000000000000000000", "10000000000000000000000"] {
            let quote = interactor.get_quote("ETH", "USDC", amount).await.unwrap();
            assert!(quote.out_of_range, "amount {}", amount);
            assert!(quote.is_empty());
            assert_eq!(quote.input_value_usd, Decimal::ZERO);
        }

        let large = interactor
            .get_quote("ETH", "USDC", "1000000000000")
            .await
            .unwrap();
        assert!(!large.out_of_range);
        assert_eq!(large.output_amount, "2345670000000000.000000");
    }

    #[test]
    fn test_minimum_received() {
        assert_eq!(minimum_received(d("2345.67"), d("0.5")), d("2333.94165"));
        assert_eq!(minimum_received(d("100"), Decimal::ZERO), d("100"));
    }
}
