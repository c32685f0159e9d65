use crate::interactor::wallet_interactor::WalletInteractor;
use crate::presenter::notify_rejection;
use crate::utils::shorten_address;
use crate::view::notifier::Notifier;
use crate::view::wallet_view::WalletView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait WalletPresenter: Send + Sync {
    async fn show_session(&self) -> Result<()>;
    async fn connect(&self, address: &str) -> Result<()>;
    async fn disconnect(&self) -> Result<()>;
    async fn select_chain(&self, chain: &str) -> Result<()>;
}

pub struct WalletPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl<I, V> WalletPresenterImpl<I, V>
where
    I: WalletInteractor,
    V: WalletView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, notifier: Arc<dyn Notifier + Send + Sync>) -> Self {
        Self {
            interactor,
            view,
            notifier,
        }
    }
}

#[async_trait]
impl<I, V> WalletPresenter for WalletPresenterImpl<I, V>
where
    I: WalletInteractor + Send + Sync,
    V: WalletView + Send + Sync,
{
    async fn show_session(&self) -> Result<()> {
        let session = self.interactor.session().await;
        self.view.display_session(&session).await
    }

    async fn connect(&self, address: &str) -> Result<()> {
        match self.interactor.connect(address).await {
            Ok(session) => {
                self.notifier
                    .success(format!("Connected {}", shorten_address(address)))
                    .await;
                self.view.display_session(&session).await
            }
            Err(e) => notify_rejection(self.notifier.as_ref(), e).await,
        }
    }

    async fn disconnect(&self) -> Result<()> {
        let session = self.interactor.disconnect().await;
        self.view.display_session(&session).await
    }

    async fn select_chain(&self, chain: &str) -> Result<()> {
        match self.interactor.select_chain(chain).await {
            Ok(session) => self.view.display_session(&session).await,
            Err(e) => notify_rejection(self.notifier.as_ref(), e).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Chain, WalletSession};
    use crate::interactor::wallet_interactor::WalletInteractorImpl;
    use crate::view::notifier::testing::RecordingNotifier;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWalletView {
        sessions: Mutex<Vec<WalletSession>>,
    }

    #[async_trait]
    impl WalletView for RecordingWalletView {
        async fn display_session(&self, session: &WalletSession) -> Result<()> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_connect_and_switch_chain() {
        let view = Arc::new(RecordingWalletView::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let presenter = WalletPresenterImpl::new(
            Arc::new(WalletInteractorImpl::new()),
            view.clone(),
            notifier.clone(),
        );

        presenter.connect("0xnope").await.unwrap();
        presenter
            .connect("0x742d35Cc6634C0532925a3b844Bc454e4438f44e")
            .await
            .unwrap();
        presenter.select_chain("solana").await.unwrap();
        presenter.select_chain("polygon").await.unwrap();

        assert_eq!(
            notifier.errors(),
            vec![
                "Invalid address".to_string(),
                "Unknown chain: solana".to_string(),
            ]
        );
        assert_eq!(
            notifier.successes(),
            vec!["Connected 0x742d...f44e".to_string()]
        );

        let sessions = view.sessions.lock().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].chain, Chain::Polygon);
        assert!(sessions[1].is_connected());
    }
}
