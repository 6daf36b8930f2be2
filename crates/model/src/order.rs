//! Orders and line items
//!
//! An order carries a snapshot of what was bought: each line item records the
//! unit price, quantity, and owning supplier at order time. The supplier
//! reference is deliberately denormalized so historical revenue stays correct
//! even if the product is later reassigned or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{CustomerId, OrderId, ProductId, SupplierId};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Parse from its lowercase wire form
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            "refunded" => Ok(Self::Refunded),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }

    /// Lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

/// One product entry within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product reference
    pub product_id: ProductId,
    /// Product name at order time
    pub product_name: String,
    /// Unit price at order time
    pub unit_price: f64,
    /// Units ordered
    pub quantity: u32,
    /// Supplier that owned the product at order time
    pub supplier_id: SupplierId,
}

impl LineItem {
    /// Create a validated line item
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
        supplier_id: SupplierId,
    ) -> Result<Self> {
        if quantity == 0 {
            return Err(ModelError::InvalidLineItem(
                "quantity must be positive".to_string(),
            ));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(ModelError::InvalidLineItem(format!(
                "unit price must be a non-negative number, got {}",
                unit_price
            )));
        }
        Ok(Self {
            product_id,
            product_name: product_name.into(),
            unit_price,
            quantity,
            supplier_id,
        })
    }

    /// Extended price for this line (`unit_price * quantity`)
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// A customer order
///
/// Orders are never hard-deleted upstream; `deleted` is the soft-delete flag
/// and excluded orders must never contribute to any rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// When the order was placed (UTC)
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// Soft-delete flag
    #[serde(default)]
    pub deleted: bool,
    /// Line items, never empty
    pub items: Vec<LineItem>,
}

impl Order {
    /// Create a validated order
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        placed_at: DateTime<Utc>,
        status: OrderStatus,
        items: Vec<LineItem>,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(ModelError::InvalidOrder(
                "order must contain at least one line item".to_string(),
            ));
        }
        Ok(Self {
            id,
            customer_id,
            placed_at,
            status,
            deleted: false,
            items,
        })
    }

    /// Mark as soft-deleted
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Line items belonging to the given supplier
    pub fn items_for_supplier<'a>(
        &'a self,
        supplier: &'a SupplierId,
    ) -> impl Iterator<Item = &'a LineItem> {
        self.items.iter().filter(move |i| &i.supplier_id == supplier)
    }

    /// Whether any line item belongs to the given supplier
    pub fn involves_supplier(&self, supplier: &SupplierId) -> bool {
        self.items.iter().any(|i| &i.supplier_id == supplier)
    }

    /// Sum of line totals across all items
    ///
    /// Always recomputed from line items; an upstream `totalAmount` field is
    /// never trusted.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
