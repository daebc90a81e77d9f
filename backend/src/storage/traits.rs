//! # Storage Traits
//!
//! The key-value contract every storage medium implements. Values are raw
//! strings; serialization is the shim's job.

use thiserror::Error;

/// Failures a storage medium can report. The shim absorbs all of them.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage medium exists in this execution context
    #[error("storage is unavailable")]
    Unavailable,

    /// The medium refused the operation (quota, permissions, I/O)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Stored content could not be converted to or from the expected shape
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// A string-keyed, string-valued store with local-storage semantics.
///
/// Implementations are synchronous; callers treat every operation as an
/// instantaneous local call.
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, `None` if the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key
    fn clear(&self) -> Result<(), StorageError>;
}
