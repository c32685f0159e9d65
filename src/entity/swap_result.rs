use rust_decimal::Decimal;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    SettlementFailed(String),
    SlippageExceeded { minimum: Decimal, realized: Decimal },
    TimedOut(Duration),
}

/// Terminal outcome of a confirmed swap.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapResult {
    Settled {
        source_token: String,
        target_token: String,
        amount_in: Decimal,
        amount_out: Decimal,
        tx_hash: String,
    },
    Rejected {
        source_token: String,
        target_token: String,
        amount_in: Decimal,
        reason: RejectionReason,
    },
}

impl SwapResult {
    pub fn is_settled(&self) -> bool {
        matches!(self, SwapResult::Settled { .. })
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::SettlementFailed(reason) => write!(f, "{}", reason),
            RejectionReason::SlippageExceeded { minimum, realized } => write!(
                f,
                "received {} below the minimum of {}",
                realized, minimum
            ),
            RejectionReason::TimedOut(after) => {
                write!(f, "no confirmation after {}s", after.as_secs())
            }
        }
    }
}
