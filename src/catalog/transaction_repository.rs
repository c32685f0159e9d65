use crate::catalog::mock_data;
use crate::entity::Transaction;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::RwLock;

/// Oldest entries fall off the feed past this length
pub const MAX_ACTIVITY_ENTRIES: usize = 100;

/// Activity feed of swap and staking transactions
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn record(&self, transaction: Transaction) -> Result<()>;

    /// Most recent first
    async fn recent(&self, limit: usize) -> Result<Vec<Transaction>>;
}

/// Kept newest first, so reads never sort.
pub struct InMemoryTransactionRepository {
    transactions: RwLock<VecDeque<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::with_transactions(mock_data::recent_transactions())
    }

    pub fn with_transactions(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions.truncate(MAX_ACTIVITY_ENTRIES);
        Self {
            transactions: RwLock::new(transactions.into()),
        }
    }
}

impl Default for InMemoryTransactionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn record(&self, transaction: Transaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        transactions.push_front(transaction);
        transactions.truncate(MAX_ACTIVITY_ENTRIES);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{TransactionKind, TransactionStatus};
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn stake(amount: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Stake,
            status: TransactionStatus::Confirmed,
            hash: "0xabc".to_string(),
            timestamp: Utc::now(),
            amount: Decimal::from(amount),
            token: "UNI".to_string(),
        }
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let repository = InMemoryTransactionRepository::new();
        repository.record(stake(1)).await.unwrap();

        let recent = repository.recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].token, "UNI");
        assert!(recent[1].timestamp >= recent[2].timestamp);
    }

    #[tokio::test]
    async fn test_seed_is_sorted_once() {
        let mut older = stake(1);
        older.timestamp = Utc::now() - Duration::hours(2);
        let repository = InMemoryTransactionRepository::with_transactions(vec![older, stake(2)]);

        let recent = repository.recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].amount, Decimal::from(2));
    }

    #[tokio::test]
    async fn test_feed_is_capped() {
        let repository = InMemoryTransactionRepository::with_transactions(vec![]);
        for amount in 0..(MAX_ACTIVITY_ENTRIES as i64 + 5) {
            repository.record(stake(amount)).await.unwrap();
        }

        let recent = repository.recent(usize::MAX).await.unwrap();
        assert_eq!(recent.len(), MAX_ACTIVITY_ENTRIES);
        assert_eq!(recent[0].amount, Decimal::from(MAX_ACTIVITY_ENTRIES as i64 + 4));
        assert_eq!(recent[MAX_ACTIVITY_ENTRIES - 1].amount, Decimal::from(5));
    }
}
