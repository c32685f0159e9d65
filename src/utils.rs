use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::RoundingStrategy;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimal places used for token amounts and exchange rates
pub const AMOUNT_DECIMALS: u32 = 6;

/// Decimal places used for USD values
pub const USD_DECIMALS: u32 = 2;

// Lenient amount parsing: anything that is not a number counts as zero
pub fn parse_amount(input: &str) -> Decimal {
    try_parse_amount(input).unwrap_or(Decimal::ZERO)
}

// Strict amount parsing, accepts plain and scientific notation
pub fn try_parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Rounds half away from zero and pads to exactly `decimals` places.
///
/// `None` when the integer part leaves no room for that many places in the
/// 28-digit mantissa.
pub fn try_format_fixed(value: Decimal, decimals: u32) -> Option<String> {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    (rounded.scale() == decimals).then(|| rounded.to_string())
}

// Display variant: values too large for fixed places keep their own scale
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    try_format_fixed(value, decimals).unwrap_or_else(|| value.normalize().to_string())
}

// Format amount with token precision
pub fn format_amount(amount: Decimal) -> String {
    format_fixed(amount, AMOUNT_DECIMALS)
}

pub fn format_usd(value: Decimal) -> String {
    format!("${}", format_fixed(value, USD_DECIMALS))
}

// Signed percentage, e.g. "+2.45%" or "-1.23%"
pub fn format_percent_change(change: Decimal) -> String {
    if change.is_sign_negative() && !change.is_zero() {
        format!("{}%", change.normalize())
    } else {
        format!("+{}%", change.normalize())
    }
}

// Compact TVL: $125.0M, $34.5K or $999
pub fn format_tvl(tvl: Decimal) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if tvl >= million {
        format!("${}M", format_fixed(tvl / million, 1))
    } else if tvl >= thousand {
        format!("${}K", format_fixed(tvl / thousand, 1))
    } else {
        format!("${}", tvl.normalize())
    }
}

// Parse slippage given as "0.5" or "0.5%"
pub fn parse_slippage(input: &str) -> Option<Decimal> {
    try_parse_amount(input.trim().trim_end_matches('%'))
}

// Validate EVM address (0x followed by 40 hex characters)
pub fn validate_evm_address(address: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    }

    RE.is_match(address)
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }

    let start = &address[..6];
    let end = &address[address.len() - 4..];

    format!("{}...{}", start, end)
}
