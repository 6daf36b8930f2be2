//! Store error types

/// Errors that can occur while reading from a data source
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend is unreachable
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// Read timed out
    #[error("data source timed out: {0}")]
    Timeout(String),

    /// Snapshot file is malformed
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether a caller may safely retry the read
    ///
    /// Reads have no side effects, so anything transient is retryable; only a
    /// malformed snapshot is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout(_) | Self::Io(_))
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
