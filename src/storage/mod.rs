//! Persisted key-value storage
//!
//! The heatmap keeps exactly one persisted value, the map-provider access
//! token. Backends implement [`KeyValueStore`]; the browser frontend wraps
//! `localStorage`, everything else uses [`MemoryStore`].

pub mod error;

pub use error::{StorageError, StorageResult};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key under which the map-provider access token is persisted
pub const TOKEN_STORAGE_KEY: &str = "mapbox_token";

/// Minimal string key-value capability
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: pre-populate an entry
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Remove a key, returning the old value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted access token; absent or unreadable yields an empty string
pub fn load_token<S: KeyValueStore + ?Sized>(store: &S) -> String {
    match store.get(TOKEN_STORAGE_KEY) {
        Ok(Some(token)) => token,
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read persisted map token");
            String::new()
        }
    }
}

/// Persist the access token
pub fn save_token<S: KeyValueStore + ?Sized>(store: &S, token: &str) -> StorageResult<()> {
    store.set(TOKEN_STORAGE_KEY, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set(TOKEN_STORAGE_KEY, "pk.abc").unwrap();
        assert_eq!(view.get(TOKEN_STORAGE_KEY).unwrap(), Some("pk.abc".to_string()));
        assert_eq!(view.remove(TOKEN_STORAGE_KEY), Some("pk.abc".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_token_defaults_to_empty() {
        assert_eq!(load_token(&MemoryStore::new()), "");
        assert_eq!(load_token(&BrokenStore), "");

        let store = MemoryStore::new().with_entry(TOKEN_STORAGE_KEY, "pk.saved");
        assert_eq!(load_token(&store), "pk.saved");
    }

    #[test]
    fn test_save_token_through_rc() {
        let store = Rc::new(MemoryStore::new());
        save_token(&store, "pk.rc").unwrap();
        assert_eq!(load_token(&*store), "pk.rc");
        assert!(save_token(&BrokenStore, "pk.x").is_err());
    }
}
