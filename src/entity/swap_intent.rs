use crate::entity::{Quote, Token};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A swap the user asked for and has not yet confirmed or cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapIntent {
    pub id: Uuid,
    pub input_token: Token,
    pub output_token: Token,
    pub input_amount: Decimal,
    pub output_amount: Decimal,
    pub slippage_percent: Decimal,
    pub minimum_received: Decimal,
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}
