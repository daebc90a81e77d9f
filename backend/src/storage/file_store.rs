//! # File Store
//!
//! Directory-backed key-value store. Each key is a single JSON file at the
//! root of the data directory:
//!
//! ```text
//! data/
//! ├── config.yaml         (optional, see config module)
//! ├── cards.json
//! └── transactions.json
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write leaves the previous value intact.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::{KeyValueStore, StorageError};

#[derive(Clone, Debug)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, StorageError> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` are replaced
    /// so a key can never escape the base directory.
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_directory.join(format!("{}.json", file_stem))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} bytes from {:?}", content.len(), path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for_key(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for_key(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        for entry in fs::read_dir(&self.base_directory)? {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}
