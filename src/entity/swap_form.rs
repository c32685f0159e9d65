use crate::entity::Token;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSide {
    From,
    To,
}

/// Token selection and typed input of the swap card.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    pub input_token: Token,
    pub output_token: Token,
    pub input_amount: String,
    pub slippage_percent: Decimal,
}

impl SwapForm {
    pub fn new(input_token: Token, output_token: Token, slippage_percent: Decimal) -> Self {
        Self {
            input_token,
            output_token,
            input_amount: String::new(),
            slippage_percent,
        }
    }

    /// Puts `token` on `side`. Picking the token that occupies the opposite
    /// side moves this side's previous token over, so the two never match.
    pub fn select_token(&mut self, side: SwapSide, token: Token) {
        match side {
            SwapSide::From => {
                if token.symbol == self.output_token.symbol {
                    self.output_token = self.input_token.clone();
                }
                self.input_token = token;
            }
            SwapSide::To => {
                if token.symbol == self.input_token.symbol {
                    self.input_token = self.output_token.clone();
                }
                self.output_token = token;
            }
        }
    }

    /// Reverses the direction. The typed amount described the old input
    /// token, so it is cleared.
    pub fn switch_tokens(&mut self) {
        std::mem::swap(&mut self.input_token, &mut self.output_token);
        self.input_amount.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn token(symbol: &str, price: &str) -> Token {
        Token {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            address: String::new(),
            decimals: 18,
            price: Decimal::from_str(price).unwrap(),
            price_change_24h: Decimal::ZERO,
            balance: None,
        }
    }

    fn form() -> SwapForm {
        SwapForm::new(token("ETH", "2345.67"), token("USDC", "1.00"), Decimal::new(5, 1))
    }

    #[test]
    fn test_select_opposite_token_swaps_slots() {
        let mut form = form();
        form.select_token(SwapSide::From, token("USDC", "1.00"));
        assert_eq!(form.input_token.symbol, "USDC");
        assert_eq!(form.output_token.symbol, "ETH");

        form.select_token(SwapSide::To, token("USDC", "1.00"));
        assert_eq!(form.input_token.symbol, "ETH");
        assert_eq!(form.output_token.symbol, "USDC");
    }

    #[test]
    fn test_select_new_token_keeps_other_side() {
        let mut form = form();
        form.select_token(SwapSide::To, token("DAI", "1.00"));
        assert_eq!(form.input_token.symbol, "ETH");
        assert_eq!(form.output_token.symbol, "DAI");

        form.select_token(SwapSide::From, token("ETH", "2345.67"));
        assert_ne!(form.input_token.symbol, form.output_token.symbol);
    }

    #[test]
    fn test_switch_tokens_clears_amount() {
        let mut form = form();
        form.input_amount = "1.5".to_string();
        form.switch_tokens();
        assert_eq!(form.input_token.symbol, "USDC");
        assert_eq!(form.output_token.symbol, "ETH");
        assert!(form.input_amount.is_empty());
    }
}
