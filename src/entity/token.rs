use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,           // Unique token symbol (e.g. "ETH", "USDC")
    pub name: String,             // Full token name
    pub address: String,          // Contract address
    pub decimals: u8,             // Number of decimal places
    pub price: Decimal,           // Unit price in USD
    pub price_change_24h: Decimal, // Signed 24h change in percent
    pub balance: Option<Decimal>, // Held balance, if any
}

impl Token {
    pub fn balance_or_zero(&self) -> Decimal {
        self.balance.unwrap_or(Decimal::ZERO)
    }

    /// USD value of the held balance.
    pub fn balance_value(&self) -> Decimal {
        self.balance_or_zero() * self.price
    }
}
