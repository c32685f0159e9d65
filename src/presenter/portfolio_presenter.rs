use crate::interactor::portfolio_interactor::PortfolioInteractor;
use crate::view::portfolio_view::PortfolioView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

#[async_trait]
pub trait PortfolioPresenter: Send + Sync {
    async fn show_tokens(&self) -> Result<()>;
    async fn show_portfolio(&self) -> Result<()>;
    async fn show_activity(&self, limit: usize) -> Result<()>;
}

pub struct PortfolioPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> PortfolioPresenterImpl<I, V>
where
    I: PortfolioInteractor,
    V: PortfolioView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> PortfolioPresenter for PortfolioPresenterImpl<I, V>
where
    I: PortfolioInteractor + Send + Sync,
    V: PortfolioView + Send + Sync,
{
    async fn show_tokens(&self) -> Result<()> {
        match self.interactor.get_tokens().await {
            Ok(tokens) => self.view.display_tokens(&tokens).await,
            Err(e) => {
                error!("Failed to load tokens: {}", e);
                self.view.display_error(e.to_string()).await
            }
        }
    }

    async fn show_portfolio(&self) -> Result<()> {
        match self.interactor.get_portfolio_summary().await {
            Ok(summary) => self.view.display_summary(&summary).await,
            Err(e) => {
                error!("Failed to build portfolio summary: {}", e);
                self.view.display_error(e.to_string()).await
            }
        }
    }

    async fn show_activity(&self, limit: usize) -> Result<()> {
        match self.interactor.get_recent_activity(limit).await {
            Ok(transactions) => self.view.display_activity(&transactions).await,
            Err(e) => {
                error!("Failed to load activity: {}", e);
                self.view.display_error(e.to_string()).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryTransactionRepository, StaticTokenRepository};
    use crate::entity::{PortfolioSummary, Token, Transaction};
    use crate::interactor::portfolio_interactor::PortfolioInteractorImpl;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPortfolioView {
        lines: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PortfolioView for RecordingPortfolioView {
        async fn display_tokens(&self, tokens: &[Token]) -> Result<()> {
            self.lines.lock().unwrap().push(format!("tokens {}", tokens.len()));
            Ok(())
        }

        async fn display_summary(&self, summary: &PortfolioSummary) -> Result<()> {
            self.lines
                .lock()
                .unwrap()
                .push(format!("holdings {}", summary.holdings.len()));
            Ok(())
        }

        async fn display_activity(&self, transactions: &[Transaction]) -> Result<()> {
            self.lines
                .lock()
                .unwrap()
                .push(format!("activity {}", transactions.len()));
            Ok(())
        }

        async fn display_error(&self, error_message: String) -> Result<()> {
            self.lines.lock().unwrap().push(error_message);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_shows_catalog_views() {
        let view = Arc::new(RecordingPortfolioView::default());
        let presenter = PortfolioPresenterImpl::new(
            Arc::new(PortfolioInteractorImpl::new(
                Arc::new(StaticTokenRepository::new()),
                Arc::new(InMemoryTransactionRepository::new()),
            )),
            view.clone(),
        );

        presenter.show_tokens().await.unwrap();
        presenter.show_portfolio().await.unwrap();
        presenter.show_activity(2).await.unwrap();

        assert_eq!(
            *view.lines.lock().unwrap(),
            vec![
                "tokens 8".to_string(),
                "holdings 8".to_string(),
                "activity 2".to_string(),
            ]
        );
    }
}
