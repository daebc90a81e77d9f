/// Test utilities shared by the storage and domain tests.
///
/// `TestEnvironment` owns a temporary directory that is removed when it goes
/// out of scope, even if the test panics. `FailingStore` stands in for a
/// storage medium that throws on every call.
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::file_store::FileStore;
use super::safe_storage::SafeStorage;
use super::traits::{KeyValueStore, StorageError};

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self, StorageError> {
        let temp_dir = TempDir::with_prefix("aspire-cards-")?;
        let base_path = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.base_path).expect("temp dir should be writable")
    }

    pub fn safe_storage(&self) -> SafeStorage {
        SafeStorage::new(Arc::new(self.file_store()))
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("ASPIRE_CARDS_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// Store whose every operation fails, like a browser with storage disabled
#[derive(Clone, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }
}
