//! Durable memory record storage for Remembery.
//!
//! The store persists the full collection of records as a JSON array under
//! one fixed key of a string key-value adapter, and offers create, list,
//! search, sort, and delete on top of it.

pub mod error;
pub mod identity;
pub mod kv;
pub mod model;
pub mod query;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// Display-name persistence.
pub use identity::IdentityStore;
/// Key-value adapter contract and default file implementation.
pub use kv::{FileKeyValueStore, KeyValueStore};
/// Memory record model.
pub use model::MemoryRecord;
/// Search and sort helpers.
pub use query::{SortOrder, matches_query, sort_records};
/// Memory collection store.
pub use store::MemoryStore;
