use async_trait::async_trait;
use parking_lot::Mutex;
use remembery_store::{KeyValueStore, StoreError};
use std::collections::HashMap;
use std::sync::Arc;

/// Which adapter operations the stub should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubFailure {
    Reads,
    Writes,
}

/// In-memory key-value adapter with optional injected failures.
#[derive(Clone, Default)]
pub struct StubKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
    failure: Option<StubFailure>,
}

impl StubKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries.into_iter().collect())),
            failure: None,
        }
    }

    pub fn failing(failure: StubFailure) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            failure: Some(failure),
        }
    }

    /// Copy of the currently stored entries.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl KeyValueStore for StubKv {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failure == Some(StubFailure::Reads) {
            return Err(StoreError::Io(std::io::Error::other("stub read failure")));
        }
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        if self.failure == Some(StubFailure::Writes) {
            return Err(StoreError::Io(std::io::Error::other("stub write failure")));
        }
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }
}
