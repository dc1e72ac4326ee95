//! Key-value persistence adapter contract and file-backed implementation.

use crate::error::StoreError;
use async_trait::async_trait;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[async_trait]
/// Durable string key-value capability the stores are built on.
///
/// An absent key is `Ok(None)`; for the memory collection that is the
/// explicit "empty collection" initialization rule, not a decode fallback.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Durably store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// File-backed adapter storing one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Root directory for key files.
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file-backed adapter under the given root.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        info!("initialized file key-value store (root={})", root.display());
        Ok(Self { root })
    }

    /// Path of the file holding `key`.
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Path of the temporary file used for atomic replacement.
    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.tmp"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the value to a temp file and rename it over the key file.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.key_path(key);
        let temp_path = self.temp_path(key);
        std::fs::write(&temp_path, value.as_bytes())?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        std::fs::rename(temp_path, &path)?;
        debug!("wrote key (key={}, len={})", key, value.len());
        Ok(())
    }
}
