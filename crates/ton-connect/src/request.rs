//! Transaction request structures

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use ton_address::TonAddress;

use crate::error::{ConnectError, ConnectResult};
use crate::types::Chain;

/// Maximum number of messages a wallet accepts in one request.
pub const MAX_MESSAGES: usize = 4;

/// A single outgoing message of a transaction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
    /// Destination address
    pub address: TonAddress,
    /// Amount in nanotons, a decimal string on the wire
    #[serde(with = "amount_string")]
    pub amount: u128,
    /// Message body as a base64 BOC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Contract state init as a base64 BOC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_init: Option<String>,
}

impl TransactionMessage {
    /// Create a plain value transfer
    pub fn new(address: TonAddress, amount: u128) -> Self {
        Self {
            address,
            amount,
            payload: None,
            state_init: None,
        }
    }

    /// Set message body
    pub fn with_payload(mut self, boc: impl Into<String>) -> Self {
        self.payload = Some(boc.into());
        self
    }

    /// Set state init for deploying the destination
    pub fn with_state_init(mut self, boc: impl Into<String>) -> Self {
        self.state_init = Some(boc.into());
        self
    }
}

/// Request handed to the wallet's send-transaction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionRequest {
    /// Unix time (seconds) after which the wallet must not sign
    pub valid_until: u64,
    /// Network the request is meant for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<Chain>,
    /// Account the wallet should send from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<TonAddress>,
    pub messages: Vec<TransactionMessage>,
}

impl SendTransactionRequest {
    /// Create a request, checking the message count.
    pub fn new(valid_until: u64, messages: Vec<TransactionMessage>) -> ConnectResult<Self> {
        if messages.is_empty() {
            return Err(ConnectError::EmptyMessages);
        }
        if messages.len() > MAX_MESSAGES {
            return Err(ConnectError::TooManyMessages {
                max: MAX_MESSAGES,
                got: messages.len(),
            });
        }

        Ok(Self {
            valid_until,
            network: None,
            from: None,
            messages,
        })
    }

    /// Create a request valid for `window` starting at `now`.
    pub fn expiring_in(
        now: SystemTime,
        window: Duration,
        messages: Vec<TransactionMessage>,
    ) -> ConnectResult<Self> {
        let now = unix_seconds(now);
        let window_secs = window.as_secs();
        let valid_until = now
            .checked_add(window_secs)
            .ok_or(ConnectError::ValidUntilOverflow { now, window_secs })?;
        Self::new(valid_until, messages)
    }

    /// Set network
    pub fn with_network(mut self, network: Chain) -> Self {
        self.network = Some(network);
        self
    }

    /// Set sender account
    pub fn with_from(mut self, from: TonAddress) -> Self {
        self.from = Some(from);
        self
    }

    /// Sum of all message amounts in nanotons
    pub fn total_amount(&self) -> u128 {
        self.messages.iter().map(|m| m.amount).sum()
    }

    /// JSON payload as sent to the wallet
    pub fn to_json(&self) -> ConnectResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Wallet answer to an accepted send-transaction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTransactionResponse {
    /// Signed external message as base64 BOC
    pub boc: String,
}

/// Seconds since the Unix epoch, clamped to zero for pre-epoch times.
pub fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

mod amount_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
