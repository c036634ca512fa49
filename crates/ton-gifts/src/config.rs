//! App configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "manifest_url": "./tonconnect-manifest.json",
//!   "valid_for_secs": 60,
//!   "gift_amount": 1000000,
//!   "network": "-239"
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ton_connect::Chain;

use crate::error::{GiftError, GiftResult};

/// Relative path of the TON Connect manifest served next to the app.
pub const DEFAULT_MANIFEST_URL: &str = "./tonconnect-manifest.json";

/// Seconds a gift transaction stays valid after submission.
pub const DEFAULT_VALID_FOR_SECS: u64 = 60;

/// Longest accepted validity window (one day).
pub const MAX_VALID_FOR_SECS: u64 = 86_400;

/// Nanotons attached to a gift transaction (0.001 TON).
pub const DEFAULT_GIFT_AMOUNT: u64 = 1_000_000;

/// Settings handed to the app at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Manifest location passed through to the wallet connector.
    pub manifest_url: String,
    /// Validity window of submitted transactions.
    pub valid_for_secs: u64,
    /// Amount in nanotons sent with a gift submission.
    pub gift_amount: u64,
    /// Network pinned in transaction requests; unset lets the wallet decide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Chain>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            valid_for_secs: DEFAULT_VALID_FOR_SECS,
            gift_amount: DEFAULT_GIFT_AMOUNT,
            network: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> GiftResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> GiftResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> GiftResult<()> {
        if self.manifest_url.trim().is_empty() {
            return Err(GiftError::InvalidConfig("manifest_url is empty".to_string()));
        }
        if self.valid_for_secs == 0 {
            return Err(GiftError::InvalidConfig(
                "valid_for_secs must be positive".to_string(),
            ));
        }
        if self.valid_for_secs > MAX_VALID_FOR_SECS {
            return Err(GiftError::InvalidConfig(format!(
                "valid_for_secs must be at most {}, got {}",
                MAX_VALID_FOR_SECS, self.valid_for_secs
            )));
        }
        Ok(())
    }

    pub fn validity_window(&self) -> Duration {
        Duration::from_secs(self.valid_for_secs)
    }

    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    pub fn with_valid_for_secs(mut self, secs: u64) -> Self {
        self.valid_for_secs = secs;
        self
    }

    pub fn with_gift_amount(mut self, nanotons: u64) -> Self {
        self.gift_amount = nanotons;
        self
    }

    pub fn with_network(mut self, network: Chain) -> Self {
        self.network = Some(network);
        self
    }
}
