use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Chain {
    #[default]
    Ethereum,
    Polygon,
    BnbChain,
}

impl Chain {
    pub const ALL: [Chain; 3] = [Chain::Ethereum, Chain::Polygon, Chain::BnbChain];

    pub fn id(&self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Polygon => 137,
            Chain::BnbChain => 56,
        }
    }

    pub fn native_symbol(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Polygon => "MATIC",
            Chain::BnbChain => "BNB",
        }
    }

    /// Matches a chain by id, name or native symbol, case-insensitively.
    pub fn lookup(value: &str) -> Option<Chain> {
        let needle = value.trim().to_lowercase();
        Chain::ALL.into_iter().find(|chain| {
            chain.id().to_string() == needle
                || chain.to_string().to_lowercase().replace(' ', "") == needle.replace(' ', "")
                || chain.native_symbol().to_lowercase() == needle
        })
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polygon => "Polygon",
            Chain::BnbChain => "BNB Chain",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    pub address: Option<String>,
    pub chain: Chain,
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}
