//! Error types for ton-connect

use thiserror::Error;

/// Errors reported by a wallet connector.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// The user declined the request in the wallet.
    #[error("User rejected the request")]
    UserRejected,

    /// No wallet is connected.
    #[error("Wallet not connected")]
    NotConnected,

    /// The wallet refused the request as malformed.
    ///
    /// Reported by wallet bridges; [`crate::MockOutcome::BadRequest`] produces it in tests.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Transaction must carry at least one message")]
    EmptyMessages,

    #[error("Too many messages: max {max}, got {got}")]
    TooManyMessages { max: usize, got: usize },

    /// Validity window runs past the representable time range.
    #[error("Validity window of {window_secs}s overflows from {now}")]
    ValidUntilOverflow { now: u64, window_secs: u64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything else the wallet reported.
    ///
    /// Reported by wallet bridges; [`crate::MockOutcome::Fail`] produces it in tests.
    #[error("Wallet error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type ConnectResult<T> = Result<T, ConnectError>;
