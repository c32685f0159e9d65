use crate::catalog::{TokenRepository, TransactionRepository};
use crate::entity::{AllocationEntry, Holding, PortfolioSummary, Token, Transaction};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

#[async_trait]
pub trait PortfolioInteractor: Send + Sync {
    async fn get_tokens(&self) -> Result<Vec<Token>>;
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;
    async fn get_recent_activity(&self, limit: usize) -> Result<Vec<Transaction>>;
}

pub struct PortfolioInteractorImpl {
    token_repository: Arc<dyn TokenRepository + Send + Sync>,
    transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,
}

impl PortfolioInteractorImpl {
    pub fn new(
        token_repository: Arc<dyn TokenRepository + Send + Sync>,
        transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,
    ) -> Self {
        Self {
            token_repository,
            transaction_repository,
        }
    }
}

/// Aggregates held balances into totals and allocation shares.
pub fn summarize(tokens: &[Token]) -> PortfolioSummary {
    let mut holdings: Vec<Holding> = tokens
        .iter()
        .filter(|token| token.balance_or_zero() > Decimal::ZERO)
        .map(|token| Holding {
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            balance: token.balance_or_zero(),
            value: token.balance_value(),
            price_change_24h: token.price_change_24h,
        })
        .collect();
    holdings.sort_by(|a, b| b.value.cmp(&a.value));

    let total_value: Decimal = holdings.iter().map(|h| h.value).sum();
    let change_value_24h: Decimal = holdings
        .iter()
        .map(|h| h.value * h.price_change_24h / Decimal::ONE_HUNDRED)
        .sum();

    let share = |value: Decimal, decimals: u32| {
        if total_value.is_zero() {
            Decimal::ZERO
        } else {
            (value * Decimal::ONE_HUNDRED / total_value).round_dp(decimals)
        }
    };

    let allocation = holdings
        .iter()
        .map(|h| AllocationEntry {
            token: h.symbol.clone(),
            value: h.value,
            percentage: share(h.value, 1),
        })
        .collect();

    PortfolioSummary {
        total_value,
        change_value_24h,
        change_percent_24h: share(change_value_24h, 2),
        allocation,
        holdings,
    }
}

#[async_trait]
impl PortfolioInteractor for PortfolioInteractorImpl {
    async fn get_tokens(&self) -> Result<Vec<Token>> {
        self.token_repository.list_tokens().await
    }

    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let tokens = self.token_repository.list_tokens().await?;
        Ok(summarize(&tokens))
    }

    async fn get_recent_activity(&self, limit: usize) -> Result<Vec<Transaction>> {
        self.transaction_repository.recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryTransactionRepository, StaticTokenRepository};
    use std::str::FromStr;

    fn d(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[tokio::test]
    async fn test_summary_from_catalog() {
        let interactor = PortfolioInteractorImpl::new(
            Arc::new(StaticTokenRepository::new()),
            Arc::new(InMemoryTransactionRepository::new()),
        );
        let summary = interactor.get_portfolio_summary().await.unwrap();

        // 3518.505 + 5000 + 2500 + 1000 + 2162.5 + 1456 + 394.5 + 984.5
        assert_eq!(summary.total_value, d("17016.005"));
        assert_eq!(summary.holdings[0].symbol, "USDC");
        assert_eq!(summary.allocation.len(), 8);

        let total_share: Decimal = summary.allocation.iter().map(|a| a.percentage).sum();
        assert!((total_share - d("100")).abs() <= d("0.5"));
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.change_percent_24h, Decimal::ZERO);
        assert!(summary.allocation.is_empty());
    }
}
