//! Data source trait

use async_trait::async_trait;
use pulse_model::{Order, Product, SupplierId};

use crate::error::Result;
use crate::query::OrderQuery;

/// Read-only access to the marketplace order/product collections
///
/// Implemented by the in-memory backend here; a SQL or document-store backend
/// would implement the same surface.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Orders matching the query, soft-deleted excluded
    async fn orders(&self, query: &OrderQuery) -> Result<Vec<Order>>;

    /// Non-deleted products owned by the supplier
    async fn products(&self, supplier: &SupplierId) -> Result<Vec<Product>>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
