use crate::entity::Token;
use rust_decimal::Decimal;

/// Quote derived from the current swap form. Recomputed on every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub input_token: Token,
    pub output_token: Token,
    /// Raw input as typed, may be empty
    pub input_amount: String,
    /// Output with 6 decimal places, empty when the input is empty
    pub output_amount: String,
    /// Units of output per unit of input, 6 decimal places
    pub exchange_rate: String,
    pub price_impact_percent: Decimal,
    pub estimated_gas_fee: Decimal,
    pub input_value_usd: Decimal,
    pub output_value_usd: Decimal,
    /// The input is too large for the output to carry 6 decimal places
    pub out_of_range: bool,
}

impl Quote {
    pub fn is_empty(&self) -> bool {
        self.output_amount.is_empty()
    }
}
