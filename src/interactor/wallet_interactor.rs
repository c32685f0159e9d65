use crate::entity::{Chain, DashboardError, WalletSession};
use crate::utils::validate_evm_address;
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use tokio::sync::RwLock;

/// Sign-in affordance only: the session is shown, never used for chain calls.
#[async_trait]
pub trait WalletInteractor: Send + Sync {
    async fn session(&self) -> WalletSession;
    async fn connect(&self, address: &str) -> Result<WalletSession>;
    async fn disconnect(&self) -> WalletSession;
    async fn select_chain(&self, chain: &str) -> Result<WalletSession>;
}

#[derive(Default)]
pub struct WalletInteractorImpl {
    session: RwLock<WalletSession>,
}

impl WalletInteractorImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletInteractor for WalletInteractorImpl {
    async fn session(&self) -> WalletSession {
        self.session.read().await.clone()
    }

    async fn connect(&self, address: &str) -> Result<WalletSession> {
        let address = address.trim();
        if !validate_evm_address(address) {
            return Err(DashboardError::InvalidAddress.into());
        }

        let mut session = self.session.write().await;
        session.address = Some(address.to_string());
        info!("Wallet connected: {}", address);
        Ok(session.clone())
    }

    async fn disconnect(&self) -> WalletSession {
        let mut session = self.session.write().await;
        if let Some(address) = session.address.take() {
            info!("Wallet disconnected: {}", address);
        }
        session.clone()
    }

    async fn select_chain(&self, chain: &str) -> Result<WalletSession> {
        let chain =
            Chain::lookup(chain).ok_or_else(|| DashboardError::UnknownChain(chain.to_string()))?;

        let mut session = self.session.write().await;
        session.chain = chain;
        info!("Switched to {} (chain id {})", chain, chain.id());
        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_and_disconnect() {
        let wallet = WalletInteractorImpl::new();
        assert!(!wallet.session().await.is_connected());

        let err = wallet.connect("not-an-address").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::InvalidAddress)
        ));

        let session = wallet
            .connect("0x71C7656EC7ab88b098defB751B7401B5f6d8976F")
            .await
            .unwrap();
        assert!(session.is_connected());

        assert!(!wallet.disconnect().await.is_connected());
    }

    #[tokio::test]
    async fn test_select_chain() {
        let wallet = WalletInteractorImpl::new();
        assert_eq!(wallet.select_chain("137").await.unwrap().chain, Chain::Polygon);
        assert_eq!(wallet.select_chain("bnb").await.unwrap().chain, Chain::BnbChain);
        assert_eq!(wallet.select_chain("Ethereum").await.unwrap().chain, Chain::Ethereum);
        assert!(wallet.select_chain("solana").await.is_err());
    }
}
