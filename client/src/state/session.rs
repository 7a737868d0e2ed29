//! Persistent client-side session: at most one `UserRecord` under a fixed key.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in the browser's `localStorage`, so it survives reloads
//! and is shared by every tab of the profile. Its presence is the only
//! "signed in" signal the UI uses.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. Write failures are logged and dropped, and a value
//! that no longer parses as a `UserRecord` is read back as "no session": an
//! absent session is always a valid state to recover into.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::UserRecord;

/// `localStorage` key holding the serialized user.
pub const SESSION_KEY: &str = "appUser";

/// Minimal string key-value storage, modelled on the Web Storage API.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`. Outside the browser every read is empty and every
/// write is a no-op, which keeps server rendering deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session not cleared");
                return;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("localStorage rejected removal of {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage. Clones share one map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut items)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) {
        self.with_items(|items| items.insert(key.to_owned(), value.to_owned()));
    }

    fn remove_item(&self, key: &str) {
        self.with_items(|items| items.remove(key));
    }
}

/// Zero or one `UserRecord`, stored as JSON under [`SESSION_KEY`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the stored user. Never fails observably.
    pub fn save(&self, user: &UserRecord) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set_item(SESSION_KEY, &raw),
            Err(e) => log::warn!("failed to serialize session user: {e}"),
        }
    }

    /// Remove the stored user. Idempotent.
    pub fn clear(&self) {
        self.storage.remove_item(SESSION_KEY);
    }

    /// The stored user, or `None` when the key is unset.
    ///
    /// A value that does not parse as a `UserRecord` (corrupt or foreign data,
    /// or a literal `null`) is also reported as `None`.
    pub fn current(&self) -> Option<UserRecord> {
        let raw = self.storage.get_item(SESSION_KEY)?;
        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring unreadable session value: {e}");
                None
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
