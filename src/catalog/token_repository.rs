use crate::catalog::mock_data;
use crate::entity::{DashboardError, Token};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;

/// Read-only access to the token catalog
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Get token information by its symbol (case-insensitive)
    async fn get_token_by_symbol(&self, symbol: &str) -> Result<Token>;

    /// All tokens in catalog order
    async fn list_tokens(&self) -> Result<Vec<Token>>;
}

/// Catalog backed by a fixed token list
pub struct StaticTokenRepository {
    tokens: Vec<Token>,
}

impl StaticTokenRepository {
    pub fn new() -> Self {
        Self::with_tokens(mock_data::tokens())
    }

    pub fn with_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl Default for StaticTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for StaticTokenRepository {
    async fn get_token_by_symbol(&self, symbol: &str) -> Result<Token> {
        debug!("Looking up token {}", symbol);

        self.tokens
            .iter()
            .find(|token| token.symbol.eq_ignore_ascii_case(symbol.trim()))
            .cloned()
            .ok_or_else(|| DashboardError::UnknownToken(symbol.to_string()).into())
    }

    async fn list_tokens(&self) -> Result<Vec<Token>> {
        Ok(self.tokens.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let repository = StaticTokenRepository::new();
        let token = repository.get_token_by_symbol("eth").await.unwrap();
        assert_eq!(token.symbol, "ETH");
        assert_eq!(token.price.to_string(), "2345.67");
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let repository = StaticTokenRepository::new();
        let err = repository.get_token_by_symbol("DOGE").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::UnknownToken(symbol)) if symbol == "DOGE"
        ));
    }

    #[tokio::test]
    async fn test_catalog_symbols_are_unique() {
        let tokens = StaticTokenRepository::new().list_tokens().await.unwrap();
        let mut symbols: Vec<_> = tokens.iter().map(|t| t.symbol.clone()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), tokens.len());
        assert!(tokens.iter().all(|t| t.price > rust_decimal::Decimal::ZERO));
    }
}
