//! Read-only view over a connector's connection state.

use std::sync::Arc;

use ton_address::TonAddress;

use crate::connector::{Subscription, WalletConnector};
use crate::types::{WalletAccount, WalletConnectionState};

/// Answers "is a wallet connected, and which account" for the rest of the app.
///
/// The gate holds no state of its own; every call reads the connector.
pub struct WalletGate<C: ?Sized> {
    connector: Arc<C>,
}

impl<C: WalletConnector + ?Sized> WalletGate<C> {
    pub fn new(connector: Arc<C>) -> Self {
        Self { connector }
    }

    pub fn is_connected(&self) -> bool {
        self.connector.state().is_connected()
    }

    /// Address of the connected account, if any.
    pub fn current_account(&self) -> Option<TonAddress> {
        self.connector.state().account_address()
    }

    /// Full account record of the connected wallet, if any.
    pub fn account(&self) -> Option<WalletAccount> {
        self.connector.state().account().cloned()
    }

    pub fn state(&self) -> WalletConnectionState {
        self.connector.state()
    }

    /// Observe connection changes until the returned handle is dropped.
    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(&WalletConnectionState) + Send + Sync + 'static,
    {
        self.connector.subscribe(Box::new(on_change))
    }

    pub fn connector(&self) -> &Arc<C> {
        &self.connector
    }
}

impl<C: ?Sized> Clone for WalletGate<C> {
    fn clone(&self) -> Self {
        Self {
            connector: Arc::clone(&self.connector),
        }
    }
}
