//! Supplier-owned products
//!
//! Rating fields are maintained by the review subsystem upstream; the
//! analytics engine only reads them.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{ProductId, SupplierId};

/// A product listed by a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub supplier_id: SupplierId,
    pub name: String,
    pub category: String,
    /// Current listed price, not the price used in revenue math
    pub price: f64,
    /// Units on hand
    pub quantity: u32,
    /// Mean rating across reviews, 0.0 when unreviewed
    #[serde(default)]
    pub average_rating: f64,
    /// Number of reviews behind `average_rating`
    #[serde(default)]
    pub review_count: u32,
    /// Soft-delete flag
    #[serde(default)]
    pub deleted: bool,
}

impl Product {
    /// Create a validated product
    pub fn new(
        id: ProductId,
        supplier_id: SupplierId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(ModelError::InvalidProduct(format!(
                "price must be a non-negative number, got {}",
                price
            )));
        }
        Ok(Self {
            id,
            supplier_id,
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            average_rating: 0.0,
            review_count: 0,
            deleted: false,
        })
    }

    /// Set the rating summary maintained by the review subsystem
    pub fn with_rating(mut self, average_rating: f64, review_count: u32) -> Self {
        self.average_rating = average_rating;
        self.review_count = review_count;
        self
    }

    /// Mark as soft-deleted
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }
}
