/// Error types for store operations

use thiserror::Error;

/// Failures surfaced by the underlying entity/graph store
///
/// Retry policy, if any, is the store's own; this layer propagates without
/// retrying.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Opening a scan session failed (I/O, connectivity)
    #[error("failed to open scan: {0}")]
    ScanOpen(String),

    /// A bulk entity fetch failed
    #[error("bulk fetch failed: {0}")]
    Fetch(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic store error
    #[error("store error: {0}")]
    Other(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError::Other(s)
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError::Other(s.to_string())
    }
}
