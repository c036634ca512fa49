//! Connection state types.

use serde::{Deserialize, Serialize};
use ton_address::TonAddress;

/// TON network a wallet account lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "-239")]
    Mainnet,
    #[serde(rename = "-3")]
    Testnet,
}

impl Chain {
    /// Network id as used in TON Connect messages.
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Mainnet => "-239",
            Chain::Testnet => "-3",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Chain::Testnet)
    }
}

/// Account exposed by a connected wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    /// Account address.
    pub address: TonAddress,
    /// Network of the account.
    pub chain: Chain,
    /// Hex-encoded public key, when the wallet shares it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl WalletAccount {
    /// Creates a mainnet account without a public key.
    pub fn new(address: TonAddress) -> Self {
        Self {
            address,
            chain: Chain::Mainnet,
            public_key: None,
        }
    }

    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Address in the form wallets display (non-bounceable, network aware).
    pub fn display_address(&self) -> String {
        self.address.to_user_friendly(false, self.chain.is_testnet())
    }
}

/// Snapshot of the wallet connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletConnectionState {
    account: Option<WalletAccount>,
}

impl WalletConnectionState {
    /// No wallet connected.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Wallet connected with the given account.
    pub fn connected(account: WalletAccount) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&WalletAccount> {
        self.account.as_ref()
    }

    pub fn account_address(&self) -> Option<TonAddress> {
        self.account.as_ref().map(|a| a.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_ids() {
        assert_eq!(Chain::Mainnet.id(), "-239");
        assert_eq!(Chain::Testnet.id(), "-3");
        assert_eq!(serde_json::to_string(&Chain::Testnet).unwrap(), "\"-3\"");
    }

    #[test]
    fn test_connection_state() {
        let state = WalletConnectionState::disconnected();
        assert!(!state.is_connected());
        assert_eq!(state.account_address(), None);

        let addr = TonAddress::new(0, [0x01; 32]);
        let state = WalletConnectionState::connected(WalletAccount::new(addr));
        assert!(state.is_connected());
        assert_eq!(state.account_address(), Some(addr));
    }

    #[test]
    fn test_account_json() {
        let json = r#"{
            "address": "0:0101010101010101010101010101010101010101010101010101010101010101",
            "chain": "-239",
            "publicKey": "abcd"
        }"#;
        let account: WalletAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.address, TonAddress::new(0, [0x01; 32]));
        assert_eq!(account.chain, Chain::Mainnet);
        assert_eq!(account.public_key.as_deref(), Some("abcd"));
    }

    #[test]
    fn test_display_address_is_non_bounceable() {
        let account = WalletAccount::new(TonAddress::new(0, [0x01; 32]));
        assert!(account.display_address().starts_with("UQ"));

        let account = account.with_chain(Chain::Testnet);
        assert!(account.display_address().starts_with("0Q"));
    }
}
