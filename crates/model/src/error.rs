//! Model error types

use thiserror::Error;

/// Errors raised by validated record construction
#[derive(Debug, Error)]
pub enum ModelError {
    /// Identifier is empty or whitespace
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Unknown order status string
    #[error("invalid order status: {0}")]
    InvalidStatus(String),

    /// Line item failed validation
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// Order failed validation
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// Product failed validation
    #[error("invalid product: {0}")]
    InvalidProduct(String),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
