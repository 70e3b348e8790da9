//! Key-value storage backends for browser-scoped persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorage` wraps `window.localStorage` and only talks to the browser
//! under the `hydrate` feature. SSR and host-side tests see it as
//! unavailable. `MemoryStorage` is a shared in-process map used by tests and
//! anywhere a throwaway store is enough.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable in this environment")]
    Unavailable,
    #[error("storage rejected write for key `{key}`")]
    Rejected { key: String },
}

/// Minimal string key-value contract shared by all backends.
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` means the store works but holds no value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backing store cannot be
    /// reached (disabled, blocked, or not in a browser).
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the store cannot be reached
    /// and [`StorageError::Rejected`] when it refuses the write (quota).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::handle()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::handle()?
                .set_item(key, value)
                .map_err(|_| StorageError::Rejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same map, so a clone handed to a second
/// consumer behaves like a fresh page load over the same browser profile.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    available: Rc<Cell<bool>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Rc::default(), available: Rc::new(Cell::new(true)) }
    }

    /// A store that fails every call, like a browser with storage disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_available(false);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Raw stored value, bypassing availability.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available.get() {
            return Err(StorageError::Unavailable);
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
