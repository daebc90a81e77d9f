//! # Safe Storage
//!
//! JSON get/set over an optional [`KeyValueStore`] that never surfaces a
//! failure to the caller.
//!
//! - `safe_read` returns the fallback when there is no medium, the key is
//!   missing or empty, the medium errors, or the content does not parse as
//!   the requested type.
//! - `safe_write` drops the value when there is no medium, serialization
//!   fails, or the medium refuses the write. No retry, no queue.
//!
//! `try_read` and `try_write` expose the same operations with the failure
//! kept, for callers (and tests) that need to tell the cases apart.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use super::file_store::FileStore;
use super::traits::{KeyValueStore, StorageError};

#[derive(Clone)]
pub struct SafeStorage {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl SafeStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Shim for an execution context with no storage medium at all
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    /// File-backed shim rooted at `directory`. A directory that cannot be
    /// created yields the unavailable shim instead of an error.
    pub fn open_directory(directory: &Path) -> Self {
        match FileStore::new(directory) {
            Ok(store) => Self::new(Arc::new(store)),
            Err(e) => {
                warn!(
                    "Storage directory {} is unusable, running without storage: {}",
                    directory.display(),
                    e
                );
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Parsed value under `key`; `Ok(None)` for a missing or empty entry
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let store = self.store.as_ref().ok_or(StorageError::Unavailable)?;
        match store.get_item(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let store = self.store.as_ref().ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(value)?;
        store.set_item(key, &raw)
    }

    pub fn safe_read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(StorageError::Unavailable) => fallback,
            Err(e) => {
                warn!("Falling back for storage key '{}': {}", key, e);
                fallback
            }
        }
    }

    pub fn safe_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match self.try_write(key, value) {
            Ok(()) | Err(StorageError::Unavailable) => {}
            Err(e) => warn!("Dropped write for storage key '{}': {}", key, e),
        }
    }
}
