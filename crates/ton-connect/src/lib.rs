//! # ton-connect
//!
//! Wallet connection seam modelled on the TON Connect protocol.
//!
//! A dApp never holds keys. It asks a connected wallet for its account and
//! hands it transaction requests to sign:
//!
//! - [`WalletConnector`]: the wallet side (state, change listeners,
//!   send-transaction, disconnect).
//! - [`WalletGate`]: read-only "is a wallet connected" view for the app.
//! - [`SendTransactionRequest`]: `{ validUntil, messages: [{ address, amount }] }`
//!   with amounts as nanoton strings on the wire.
//! - [`MockWallet`]: in-memory connector recording every request.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ton_address::TonAddress;
//! use ton_connect::{MockWallet, WalletAccount, WalletGate};
//!
//! let wallet = Arc::new(MockWallet::new());
//! let gate = WalletGate::new(Arc::clone(&wallet));
//! assert!(!gate.is_connected());
//!
//! wallet.connect(WalletAccount::new(TonAddress::new(0, [1; 32])));
//! assert_eq!(gate.current_account(), Some(TonAddress::new(0, [1; 32])));
//! ```

pub mod connector;
pub mod error;
pub mod gate;
pub mod mock;
pub mod request;
pub mod types;

// Re-exports
pub use connector::{Listeners, StateListener, Subscription, WalletConnector};
pub use error::{ConnectError, ConnectResult};
pub use gate::WalletGate;
pub use mock::{MockOutcome, MockWallet, MOCK_BOC};
pub use request::{
    unix_seconds, SendTransactionRequest, SendTransactionResponse, TransactionMessage, MAX_MESSAGES,
};
pub use types::{Chain, WalletAccount, WalletConnectionState};
