//! In-memory wallet connector for tests and demos.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::connector::{Listeners, StateListener, Subscription, WalletConnector};
use crate::error::{ConnectError, ConnectResult};
use crate::request::{SendTransactionRequest, SendTransactionResponse};
use crate::types::{WalletAccount, WalletConnectionState};

/// BOC of an empty cell, returned for approved requests.
pub const MOCK_BOC: &str = "te6cckEBAQEAAgAAAEysuc0=";

/// How the mock wallet answers send requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockOutcome {
    /// Sign and return [`MOCK_BOC`].
    #[default]
    Approve,
    /// Fail with [`ConnectError::UserRejected`].
    Reject,
    /// Fail with [`ConnectError::BadRequest`], as a wallet refusing a malformed request.
    BadRequest,
    /// Fail with [`ConnectError::Unknown`], as a bridge or wallet internal error.
    Fail,
}

#[derive(Default)]
struct MockState {
    connection: WalletConnectionState,
    outcome: MockOutcome,
    sent: Vec<SendTransactionRequest>,
}

/// A mock wallet connector.
///
/// Records every send-transaction call, connected or not.
#[derive(Default)]
pub struct MockWallet {
    state: Mutex<MockState>,
    listeners: Listeners,
}

impl MockWallet {
    /// Create a disconnected mock wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock wallet already connected to `account`.
    pub fn connected(account: WalletAccount) -> Self {
        let wallet = Self::new();
        wallet.lock().connection = WalletConnectionState::connected(account);
        wallet
    }

    /// Simulate the user approving a connection.
    pub fn connect(&self, account: WalletAccount) {
        debug!("Mock wallet connected: {}", account.address);
        self.set_connection(WalletConnectionState::connected(account));
    }

    /// Simulate the session ending on the wallet side.
    pub fn drop_session(&self) {
        debug!("Mock wallet disconnected");
        self.set_connection(WalletConnectionState::disconnected());
    }

    /// Set how subsequent send requests are answered.
    pub fn set_outcome(&self, outcome: MockOutcome) {
        self.lock().outcome = outcome;
    }

    /// All requests received so far, in order.
    pub fn sent_requests(&self) -> Vec<SendTransactionRequest> {
        self.lock().sent.clone()
    }

    pub fn send_count(&self) -> usize {
        self.lock().sent.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_connection(&self, connection: WalletConnectionState) {
        self.lock().connection = connection.clone();
        self.listeners.notify(&connection);
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    fn state(&self) -> WalletConnectionState {
        self.lock().connection.clone()
    }

    fn subscribe(&self, listener: StateListener) -> Subscription {
        self.listeners.add(listener)
    }

    async fn send_transaction(
        &self,
        request: SendTransactionRequest,
    ) -> ConnectResult<SendTransactionResponse> {
        debug!("Mock wallet received request: {}", request.to_json()?);

        let mut state = self.lock();
        state.sent.push(request);

        if !state.connection.is_connected() {
            return Err(ConnectError::NotConnected);
        }

        match state.outcome {
            MockOutcome::Approve => Ok(SendTransactionResponse {
                boc: MOCK_BOC.to_string(),
            }),
            MockOutcome::Reject => Err(ConnectError::UserRejected),
            MockOutcome::BadRequest => Err(ConnectError::BadRequest(
                "wallet refused the request".to_string(),
            )),
            MockOutcome::Fail => Err(ConnectError::Unknown("wallet bridge error".to_string())),
        }
    }

    async fn disconnect(&self) -> ConnectResult<()> {
        if !self.state().is_connected() {
            return Err(ConnectError::NotConnected);
        }
        self.drop_session();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::TransactionMessage;
    use ton_address::TonAddress;

    fn account() -> WalletAccount {
        WalletAccount::new(TonAddress::new(0, [0x33; 32]))
    }

    fn request() -> SendTransactionRequest {
        SendTransactionRequest::new(
            100,
            vec![TransactionMessage::new(TonAddress::new(0, [0x33; 32]), 1)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_approve_records_request() {
        let wallet = MockWallet::connected(account());
        let response = wallet.send_transaction(request()).await.unwrap();
        assert_eq!(response.boc, MOCK_BOC);
        assert_eq!(wallet.sent_requests(), vec![request()]);
    }

    #[tokio::test]
    async fn test_reject() {
        let wallet = MockWallet::connected(account());
        wallet.set_outcome(MockOutcome::Reject);
        let err = wallet.send_transaction(request()).await.unwrap_err();
        assert!(matches!(err, ConnectError::UserRejected));
        assert_eq!(wallet.send_count(), 1);
    }

    #[tokio::test]
    async fn test_wallet_errors() {
        let wallet = MockWallet::connected(account());

        wallet.set_outcome(MockOutcome::BadRequest);
        let err = wallet.send_transaction(request()).await.unwrap_err();
        assert!(matches!(err, ConnectError::BadRequest(_)));

        wallet.set_outcome(MockOutcome::Fail);
        let err = wallet.send_transaction(request()).await.unwrap_err();
        assert!(matches!(err, ConnectError::Unknown(_)));
        assert_eq!(err.to_string(), "Wallet error: wallet bridge error");

        assert_eq!(wallet.send_count(), 2);
    }

    #[tokio::test]
    async fn test_send_while_disconnected() {
        let wallet = MockWallet::new();
        let err = wallet.send_transaction(request()).await.unwrap_err();
        assert!(matches!(err, ConnectError::NotConnected));
    }

    #[tokio::test]
    async fn test_disconnect() {
        let wallet = MockWallet::connected(account());
        wallet.disconnect().await.unwrap();
        assert!(!wallet.state().is_connected());
        assert!(matches!(
            wallet.disconnect().await,
            Err(ConnectError::NotConnected)
        ));
    }
}
