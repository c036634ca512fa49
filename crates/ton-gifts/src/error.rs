//! Error types for the gifts app.

use thiserror::Error;

/// Errors that can occur in the gifts app.
#[derive(Debug, Error)]
pub enum GiftError {
    /// Configuration is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON for [`crate::AppConfig`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The wallet connector failed.
    #[error("Wallet error: {0}")]
    Connect(#[from] ton_connect::ConnectError),
}

/// Result type for gifts app operations.
pub type GiftResult<T> = Result<T, GiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GiftError::InvalidConfig("manifest_url is empty".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: manifest_url is empty");

        let err: GiftError = ton_connect::ConnectError::UserRejected.into();
        assert_eq!(err.to_string(), "Wallet error: User rejected the request");
    }
}
