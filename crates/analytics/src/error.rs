//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid time range
    #[error("invalid time range: {0}")]
    InvalidTimeRange(String),

    /// Invalid trailing-window day count
    #[error("invalid window: {0}")]
    InvalidWindow(String),

    /// Invalid top-K limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    /// Backend error (from pulse-store)
    #[error("store error: {0}")]
    Store(#[from] pulse_store::StoreError),
}

impl AnalyticsError {
    /// Whether the caller may safely retry
    ///
    /// Input errors never are; store errors follow the store's taxonomy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Store(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
