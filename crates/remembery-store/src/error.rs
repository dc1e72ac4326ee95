//! Error types for store operations.

/// Errors returned by the memory and identity stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input rejected before any I/O.
    #[error("validation error: {0}")]
    Validation(String),
    /// Persistence read or write failure.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
