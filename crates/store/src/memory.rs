//! In-memory backend
//!
//! Holds the full order/product collections in memory. Used by unit and
//! integration tests, and by the server when pointed at a JSON snapshot file.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pulse_model::{Order, Product, SupplierId};

use crate::error::{Result, StoreError};
use crate::query::OrderQuery;
use crate::source::DataSource;

/// A full snapshot of the order/product collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// In-memory data source
pub struct MemoryStore {
    orders: Vec<Order>,
    products: Vec<Product>,
}

impl MemoryStore {
    /// Create from owned collections
    pub fn new(orders: Vec<Order>, products: Vec<Product>) -> Self {
        Self { orders, products }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Create from a snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::new(snapshot.orders, snapshot.products)
    }

    /// Load a JSON snapshot file
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(|e| {
            StoreError::Snapshot(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Number of orders held, including soft-deleted
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of products held, including soft-deleted
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[async_trait]
impl DataSource for MemoryStore {
    async fn orders(&self, query: &OrderQuery) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .iter()
            .filter(|o| query.matches(o))
            .cloned()
            .collect())
    }

    async fn products(&self, supplier: &SupplierId) -> Result<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| !p.deleted && &p.supplier_id == supplier)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
