//! The memory collection store: durable CRUD + query over records.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::model::MemoryRecord;
use crate::query::{SortOrder, matches_query, sort_records};
use chrono::Utc;
use log::{debug, info};
use tokio::sync::Mutex;

/// Fixed adapter key holding the serialized collection.
pub(crate) const MEMORIES_KEY: &str = "memories";

/// Durable store for the canonical collection of memory records.
///
/// Every mutation is a full load-modify-persist of the collection; the
/// adapter offers no partial update primitive. Mutations are serialized on
/// a single async mutex so two rapid writes cannot lose an update.
pub struct MemoryStore<K> {
    kv: K,
    write_lock: Mutex<()>,
}

impl<K: KeyValueStore> MemoryStore<K> {
    /// Create a store over the given key-value adapter.
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the collection as stored. Absent key means empty.
    async fn load(&self) -> Result<Vec<MemoryRecord>, StoreError> {
        let Some(raw) = self.kv.get(MEMORIES_KEY).await? else {
            return Ok(Vec::new());
        };
        let records = serde_json::from_str(&raw)?;
        Ok(records)
    }

    /// Persist the full collection.
    async fn persist(&self, records: &[MemoryRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records)?;
        self.kv.set(MEMORIES_KEY, raw).await
    }

    /// Create and persist a new memory.
    ///
    /// Rejects empty or whitespace-only text before any I/O. The text is
    /// stored as given; only the trimmed form is validated.
    pub async fn remember(
        &self,
        text: &str,
        image: Option<String>,
    ) -> Result<MemoryRecord, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::Validation(
                "memory text must not be empty".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;

        let now = Utc::now();
        let mut id = now.timestamp_millis();
        // Wall-clock ids can collide under back-to-back writes; bump past
        // the current maximum to keep ids unique and ordered.
        if let Some(max) = records.iter().map(|record| record.id).max() {
            if id <= max {
                id = max + 1;
            }
        }

        let record = MemoryRecord {
            id,
            text: text.to_string(),
            time: now,
            image,
        };
        records.push(record.clone());
        self.persist(&records).await?;
        info!(
            "memory stored (id={}, text_len={}, image={})",
            record.id,
            record.text.len(),
            record.has_image()
        );
        Ok(record)
    }

    /// List the collection in stored (insertion) order.
    pub async fn list(&self) -> Result<Vec<MemoryRecord>, StoreError> {
        self.load().await
    }

    /// Records whose text matches `query`, in stored order.
    pub async fn search(&self, query: &str) -> Result<Vec<MemoryRecord>, StoreError> {
        let mut records = self.load().await?;
        records.retain(|record| matches_query(&record.text, query));
        debug!(
            "search (query_len={}, returned={})",
            query.len(),
            records.len()
        );
        Ok(records)
    }

    /// Filtered, sorted listing: the shape the presentation layer consumes.
    pub async fn recall(
        &self,
        query: Option<&str>,
        order: SortOrder,
    ) -> Result<Vec<MemoryRecord>, StoreError> {
        let mut records = match query {
            Some(query) => self.search(query).await?,
            None => self.list().await?,
        };
        sort_records(&mut records, order);
        Ok(records)
    }

    /// Delete a memory by id.
    ///
    /// Deleting an id that is not present is a no-op returning `Ok(false)`;
    /// a removed record is persisted and reported as `Ok(true)`.
    pub async fn forget(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            debug!("forget no-op (id={})", id);
            return Ok(false);
        }
        self.persist(&records).await?;
        info!("memory removed (id={}, remaining={})", id, records.len());
        Ok(true)
    }
}
