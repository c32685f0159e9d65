use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationEntry {
    pub token: String,
    pub value: Decimal,
    pub percentage: Decimal, // Share of the total value, 1 decimal place
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub balance: Decimal,
    pub value: Decimal,
    pub price_change_24h: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub change_value_24h: Decimal,
    pub change_percent_24h: Decimal,
    pub allocation: Vec<AllocationEntry>,
    pub holdings: Vec<Holding>,
}
