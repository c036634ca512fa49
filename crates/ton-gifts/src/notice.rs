//! Blocking user notices.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

/// Shows a notice the user must acknowledge before continuing.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Notifier that only logs; for shells without a dialog primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!("Notice: {}", message);
    }
}

/// Notifier that keeps every notice it was asked to show.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<String>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.notices.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for NoticeLog {
    fn alert(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
