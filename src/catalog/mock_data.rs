//! Seed data for the catalog: tokens, staking pools and the activity feed.
use crate::entity::{StakingPool, Token, Transaction, TransactionKind, TransactionStatus};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const ETH_SYMBOL: &str = "ETH";
pub const USDC_SYMBOL: &str = "USDC";

fn token(
    symbol: &str,
    name: &str,
    address: &str,
    decimals: u8,
    price: Decimal,
    price_change_24h: Decimal,
    balance: Decimal,
) -> Token {
    Token {
        symbol: symbol.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        decimals,
        price,
        price_change_24h,
        balance: Some(balance),
    }
}

pub fn tokens() -> Vec<Token> {
    vec![
        token(
            ETH_SYMBOL,
            "Ethereum",
            "0x0000000000000000000000000000000000000000",
            18,
            Decimal::new(234567, 2),
            Decimal::new(245, 2),
            Decimal::new(15, 1),
        ),
        token(
            USDC_SYMBOL,
            "USD Coin",
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            6,
            Decimal::new(100, 2),
            Decimal::new(1, 2),
            Decimal::new(500000, 2),
        ),
        token(
            "USDT",
            "Tether",
            "0xdac17f958d2ee523a2206206994597c13d831ec7",
            6,
            Decimal::new(100, 2),
            Decimal::new(-2, 2),
            Decimal::new(250000, 2),
        ),
        token(
            "DAI",
            "Dai",
            "0x6b175474e89094c44da98b954eedeac495271d0f",
            18,
            Decimal::new(100, 2),
            Decimal::ZERO,
            Decimal::new(100000, 2),
        ),
        token(
            "WBTC",
            "Wrapped Bitcoin",
            "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599",
            8,
            Decimal::new(4325000, 2),
            Decimal::new(-123, 2),
            Decimal::new(5, 2),
        ),
        token(
            "LINK",
            "Chainlink",
            "0x514910771af9ca656af840dff83e8264ecf986ca",
            18,
            Decimal::new(1456, 2),
            Decimal::new(567, 2),
            Decimal::new(10000, 2),
        ),
        token(
            "UNI",
            "Uniswap",
            "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984",
            18,
            Decimal::new(789, 2),
            Decimal::new(-234, 2),
            Decimal::new(5000, 2),
        ),
        token(
            "AAVE",
            "Aave",
            "0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9",
            18,
            Decimal::new(9845, 2),
            Decimal::new(321, 2),
            Decimal::new(1000, 2),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn pool(
    id: &str,
    name: &str,
    token_symbol: &str,
    apr: Decimal,
    tvl: Decimal,
    staked_amount: Decimal,
    earned_rewards: Decimal,
    lockup_period_days: u32,
) -> StakingPool {
    StakingPool {
        id: id.to_string(),
        name: name.to_string(),
        token_symbol: token_symbol.to_string(),
        apr,
        tvl,
        staked_amount,
        earned_rewards,
        lockup_period_days,
        reward_token: token_symbol.to_string(),
    }
}

pub fn staking_pools() -> Vec<StakingPool> {
    vec![
        pool(
            "1",
            "ETH Staking",
            ETH_SYMBOL,
            Decimal::new(45, 1),
            Decimal::from(125_000_000),
            Decimal::new(75, 2),
            Decimal::new(34, 4),
            0,
        ),
        pool(
            "2",
            "USDC Vault",
            USDC_SYMBOL,
            Decimal::new(82, 1),
            Decimal::from(89_000_000),
            Decimal::from(2500),
            Decimal::new(1745, 2),
            7,
        ),
        pool(
            "3",
            "LINK Staking",
            "LINK",
            Decimal::new(125, 1),
            Decimal::from(34_000_000),
            Decimal::from(50),
            Decimal::new(52, 2),
            14,
        ),
        pool(
            "4",
            "UNI Pool",
            "UNI",
            Decimal::new(158, 1),
            Decimal::from(28_000_000),
            Decimal::ZERO,
            Decimal::ZERO,
            30,
        ),
    ]
}

pub fn recent_transactions() -> Vec<Transaction> {
    let now = Utc::now();
    let entry = |kind, status, hash: &str, minutes_ago, amount, token: &str| Transaction {
        id: Uuid::new_v4(),
        kind,
        status,
        hash: hash.to_string(),
        timestamp: now - Duration::minutes(minutes_ago),
        amount,
        token: token.to_string(),
    };

    vec![
        entry(
            TransactionKind::Claim,
            TransactionStatus::Pending,
            "0x3456...7890",
            1,
            Decimal::new(523, 2),
            "LINK",
        ),
        entry(
            TransactionKind::Swap,
            TransactionStatus::Confirmed,
            "0x1234...5678",
            5,
            Decimal::new(5, 1),
            ETH_SYMBOL,
        ),
        entry(
            TransactionKind::Stake,
            TransactionStatus::Confirmed,
            "0x2345...6789",
            10,
            Decimal::from(1000),
            USDC_SYMBOL,
        ),
        entry(
            TransactionKind::Swap,
            TransactionStatus::Failed,
            "0x4567...8901",
            15,
            Decimal::from(100),
            "DAI",
        ),
    ]
}
