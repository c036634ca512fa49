//! Wallet connector trait and state listeners.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use async_trait::async_trait;

use crate::error::ConnectResult;
use crate::request::{SendTransactionRequest, SendTransactionResponse};
use crate::types::WalletConnectionState;

/// Callback invoked with the new state on every connection change.
pub type StateListener = Box<dyn Fn(&WalletConnectionState) + Send + Sync>;

/// Common wallet connector interface.
///
/// Implemented by bridges to a real wallet and by [`crate::MockWallet`].
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Current connection snapshot.
    fn state(&self) -> WalletConnectionState;

    /// Register a listener for connection changes.
    fn subscribe(&self, listener: StateListener) -> Subscription;

    /// Ask the wallet to sign and send a transaction.
    async fn send_transaction(
        &self,
        request: SendTransactionRequest,
    ) -> ConnectResult<SendTransactionResponse>;

    /// Drop the current wallet session.
    async fn disconnect(&self) -> ConnectResult<()>;
}

type SharedListener = Arc<dyn Fn(&WalletConnectionState) + Send + Sync>;

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(u64, SharedListener)>,
}

/// Registry of state listeners for connector implementations.
#[derive(Default, Clone)]
pub struct Listeners {
    inner: Arc<Mutex<ListenerSet>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; it stays registered while the returned handle lives.
    pub fn add(&self, listener: StateListener) -> Subscription {
        let mut set = lock(&self.inner);
        let id = set.next_id;
        set.next_id += 1;
        set.entries.push((id, Arc::from(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Call every listener with `state`.
    ///
    /// Listeners run outside the registry lock, so they may subscribe or
    /// unsubscribe while being notified.
    pub fn notify(&self, state: &WalletConnectionState) {
        let snapshot: Vec<SharedListener> = lock(&self.inner)
            .entries
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in snapshot {
            listener(state);
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a registered listener.
///
/// Dropping the handle detaches the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerSet>>,
}

impl Subscription {
    /// Detach the listener now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

// A panicking listener must not take the whole registry down with it.
fn lock(set: &Mutex<ListenerSet>) -> MutexGuard<'_, ListenerSet> {
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WalletAccount;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use ton_address::TonAddress;

    fn counter() -> (Arc<AtomicUsize>, StateListener) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        (
            hits,
            Box::new(move |_| {
                h.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn test_notify_reaches_all_listeners() {
        let listeners = Listeners::new();
        let (a, la) = counter();
        let (b, lb) = counter();
        let _sa = listeners.add(la);
        let _sb = listeners.add(lb);

        listeners.notify(&WalletConnectionState::disconnected());
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_detaches() {
        let listeners = Listeners::new();
        let (hits, listener) = counter();
        let sub = listeners.add(listener);
        assert_eq!(listeners.len(), 1);

        sub.unsubscribe();
        assert!(listeners.is_empty());

        listeners.notify(&WalletConnectionState::disconnected());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_sees_state() {
        let listeners = Listeners::new();
        let seen = Arc::new(Mutex::new(None));
        let s = Arc::clone(&seen);
        let _sub = listeners.add(Box::new(move |state| {
            *s.lock().unwrap() = state.account_address();
        }));

        let addr = TonAddress::new(0, [0x05; 32]);
        listeners.notify(&WalletConnectionState::connected(WalletAccount::new(addr)));
        assert_eq!(*seen.lock().unwrap(), Some(addr));
    }

    #[test]
    fn test_subscription_outlives_registry() {
        let listeners = Listeners::new();
        let (_, listener) = counter();
        let sub = listeners.add(listener);
        drop(listeners);
        drop(sub);
    }
}
