//! Session Store: the single persisted slot holding the bearer token.
//!
//! DESIGN
//! ======
//! Components never touch browser storage directly. They go through the
//! [`SessionStore`] seam so tests can swap in [`MemorySessionStore`].
//! Presence of a value is the only meaning of "authenticated"; the token is
//! never inspected.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// `localStorage` key of the bearer token slot.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable get/set/clear slot for the current bearer token.
pub trait SessionStore {
    /// The persisted token, or `None` when absent.
    fn get_token(&self) -> Option<String>;

    /// Persist `value`, replacing any previous token.
    fn set_token(&self, value: &str);

    /// Remove the token. Clearing an absent token is a no-op.
    fn clear_token(&self);
}

/// Shared store handle provided through Leptos context.
pub type SessionHandle = Arc<dyn SessionStore + Send + Sync>;

/// Store backed by `window.localStorage`. Outside the browser it behaves as an
/// always-empty slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    #[must_use]
    pub fn handle() -> SessionHandle {
        Arc::new(Self)
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match Self::storage()?.get_item(TOKEN_STORAGE_KEY) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("session token read failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, value) {
                    log::warn!("session token write failed: {e:?}");
                }
            }
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
                    log::warn!("session token removal failed: {e:?}");
                }
            }
        }
    }
}

/// A write observed by [`MemorySessionStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreOp {
    Set(String),
    Clear,
}

/// In-memory store for tests and non-browser hosts. Clones share one slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
    ops: Arc<Mutex<Vec<StoreOp>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, with an empty write history.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.slot() = Some(token.to_owned());
        store
    }

    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        Arc::new(self.clone())
    }

    /// Every set/clear applied so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, op: StoreOp) {
        self.ops
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(op);
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        self.slot().clone()
    }

    fn set_token(&self, value: &str) {
        *self.slot() = Some(value.to_owned());
        self.record(StoreOp::Set(value.to_owned()));
    }

    fn clear_token(&self) {
        *self.slot() = None;
        self.record(StoreOp::Clear);
    }
}
