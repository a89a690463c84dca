//! Browser storage
//!
//! `localStorage` behind the core key-value capability. When the browser
//! refuses storage (private mode, disabled cookies) the dashboard keeps the
//! token in memory for the session instead.

use crime_foresight::storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_string())),
            Err(e) => Err(StorageError::Unavailable(format!("{:?}", e))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Store for the map token: `localStorage` when available, memory otherwise
pub fn token_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("{}; the map token will not survive a reload", e).into(),
            );
            Box::new(MemoryStore::new())
        }
    }
}
