//! Order query parameters
//!
//! Selects orders for one supplier, optionally narrowed by status and a
//! half-open `[start, end)` UTC window on the order timestamp. Soft-deleted
//! orders are always excluded; supplier matching is at line-item level, so an
//! order placed across several suppliers is visible to each of them.

use chrono::{DateTime, Utc};
use pulse_model::{OrderStatus, SupplierId};

/// Query for orders involving a supplier
#[derive(Debug, Clone)]
pub struct OrderQuery {
    /// Supplier whose line items select the order
    pub supplier: SupplierId,
    /// Restrict to one status (None = any status)
    pub status: Option<OrderStatus>,
    /// Inclusive lower bound on `placed_at`
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `placed_at`
    pub end: Option<DateTime<Utc>>,
}

impl OrderQuery {
    /// All orders involving the supplier
    pub fn for_supplier(supplier: SupplierId) -> Self {
        Self {
            supplier,
            status: None,
            start: None,
            end: None,
        }
    }

    /// Restrict to one status
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to `[start, end)` on the order timestamp
    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Whether an order matches this query
    pub fn matches(&self, order: &pulse_model::Order) -> bool {
        if order.deleted {
            return false;
        }
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(start) = self.start {
            if order.placed_at < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if order.placed_at >= end {
                return false;
            }
        }
        order.involves_supplier(&self.supplier)
    }
}
