//! Process-wide completion API key.
//!
//! The key is the only shared mutable state in the server. It is injected
//! through `AppState` rather than read from an ambient global, so tests get
//! isolated instances. Concurrent writers race last-write-wins; readers
//! always see a whole value, never a torn one.

use std::sync::{Arc, RwLock};

/// Cloneable handle to the current API key. Empty string = unset.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyHandle {
    key: Arc<RwLock<String>>,
}

impl ApiKeyHandle {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            key: Arc::new(RwLock::new(initial.unwrap_or_default())),
        }
    }

    /// Snapshot of the current key. Empty when unset - not an error.
    pub fn current(&self) -> String {
        self.lock_read().clone()
    }

    pub fn is_configured(&self) -> bool {
        !self.lock_read().is_empty()
    }

    /// Replace the whole value. Last write wins.
    pub fn replace(&self, new_key: String) {
        let mut guard = self.key.write().unwrap_or_else(|e| e.into_inner());
        *guard = new_key;
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, String> {
        self.key.read().unwrap_or_else(|e| e.into_inner())
    }
}
