use crate::entity::{Chain, WalletSession};
use crate::utils::shorten_address;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WalletView: Send + Sync {
    async fn display_session(&self, session: &WalletSession) -> Result<()>;
}

pub fn render_session(session: &WalletSession) -> String {
    let chains = Chain::ALL
        .iter()
        .map(|chain| {
            if *chain == session.chain {
                format!("[{}]", chain)
            } else {
                chain.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    match &session.address {
        Some(address) => format!(
            "Connected: {} on {}\nNetworks: {}",
            shorten_address(address),
            session.chain,
            chains
        ),
        None => format!(
            "Wallet not connected. Use 'wallet connect <address>'.\nNetworks: {}",
            chains
        ),
    }
}

pub struct ConsoleWalletView;

impl ConsoleWalletView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleWalletView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletView for ConsoleWalletView {
    async fn display_session(&self, session: &WalletSession) -> Result<()> {
        println!("{}", render_session(session));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_session() {
        let mut session = WalletSession::default();
        assert!(render_session(&session).starts_with("Wallet not connected"));

        session.address = Some("0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string());
        session.chain = Chain::Polygon;
        assert_eq!(
            render_session(&session),
            "Connected: 0x71C7...976F on Polygon\nNetworks: Ethereum [Polygon] BNB Chain"
        );
    }
}
