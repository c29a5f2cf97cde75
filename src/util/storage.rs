//! Key-value store abstraction over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entry book persists its whole collection under a single key. Routing
//! that through [`KeyValueStore`] keeps web-sys glue in one place and lets
//! state tests run natively against [`MemoryStore`].
//!
//! TRADE-OFFS
//! ==========
//! Browser access is best-effort: off-browser builds (no `csr` feature) report
//! [`StoreError::Unavailable`] and callers fall back to an empty collection.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`KeyValueStore`] operations and the JSON helpers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (no window, storage disabled, or a
    /// non-browser build).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected a read.
    #[error("storage read failed: {0}")]
    Read(String),
    /// The backend rejected a write (quota exceeded, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),
    /// The stored text could not be encoded or decoded as JSON.
    #[error("storage codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Minimal string key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the raw value for `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or refuses the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or refuses the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Handle to `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StoreError::Read(format!("{e:?}")))?
        .ok_or(StoreError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|e| StoreError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

/// In-memory store for tests and non-browser embeddings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_owned(), value.to_owned());
        store
    }

    #[cfg(test)]
    pub(crate) fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored text is not valid
/// JSON for `T`. An absent key is `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StoreError> {
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error when encoding fails or the store refuses the write.
pub fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}
