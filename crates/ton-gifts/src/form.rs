//! Submission form controller.

use std::time::SystemTime;

use ton_address::TonAddress;
use ton_connect::{
    ConnectError, ConnectResult, SendTransactionRequest, SendTransactionResponse,
    TransactionMessage, WalletConnector, WalletGate,
};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::notice::Notifier;

/// Notice shown when submitting without a connected wallet.
pub const CONNECT_WALLET_NOTICE: &str = "Сначала подключи TON кошелёк!";

/// User-entered, not yet submitted gift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSubmission {
    pub name: String,
}

/// What a submit attempt led to.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// No wallet connected; the notice was shown and nothing was sent.
    Blocked,
    /// The wallet accepted the transaction.
    Sent(SendTransactionResponse),
    /// The wallet refused or failed.
    Failed(ConnectError),
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent(_))
    }
}

/// Build the gift transaction: one message from the account back to itself.
pub fn gift_transaction(
    account: TonAddress,
    now: SystemTime,
    config: &AppConfig,
) -> ConnectResult<SendTransactionRequest> {
    let message = TransactionMessage::new(account, u128::from(config.gift_amount));
    let request =
        SendTransactionRequest::expiring_in(now, config.validity_window(), vec![message])?;

    Ok(match config.network {
        Some(network) => request.with_network(network),
        None => request,
    })
}

/// State of a mounted submission screen.
///
/// The draft is never trimmed, limited or cleared, not even after a submit.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    draft: DraftSubmission,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft with the input's current value.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn draft(&self) -> &DraftSubmission {
        &self.draft
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    /// Submit the draft.
    ///
    /// Without a connected wallet the notice is shown once and the wallet is
    /// never called. Otherwise the gift transaction is sent exactly once and
    /// its outcome returned.
    pub async fn submit<C, N>(
        &self,
        gate: &WalletGate<C>,
        notifier: &N,
        config: &AppConfig,
        now: SystemTime,
    ) -> SubmitOutcome
    where
        C: WalletConnector + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(account) = gate.current_account() else {
            notifier.alert(CONNECT_WALLET_NOTICE);
            return SubmitOutcome::Blocked;
        };

        info!("Sending gift {:?} from {}", self.draft.name, account);

        let request = match gift_transaction(account, now, config) {
            Ok(request) => request,
            Err(err) => {
                warn!("Gift transaction not built: {}", err);
                return SubmitOutcome::Failed(err);
            }
        };

        match gate.connector().send_transaction(request).await {
            Ok(response) => {
                info!("Gift transaction accepted by wallet");
                SubmitOutcome::Sent(response)
            }
            Err(err) => {
                warn!("Gift transaction failed: {}", err);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
