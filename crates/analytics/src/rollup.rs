//! Revenue rollup
//!
//! Flattens a supplier's delivered orders into the headline dashboard
//! numbers. An order may carry line items from several suppliers; only the
//! supplier's own items contribute, and the order counts once toward the
//! distinct-order total no matter how many of its items match.

use serde::Serialize;

use pulse_model::{Order, OrderStatus, SupplierId};

/// Headline revenue numbers for one supplier
///
/// Currency values are accumulated in f64 and never rounded here; formatting
/// belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueRollup {
    /// Sum of `unit_price * quantity` over the supplier's delivered line items
    pub total_earnings: f64,
    /// Distinct orders with at least one matching line item
    pub total_orders: u64,
    /// Units across matching line items
    pub total_units_sold: u64,
    /// `total_earnings / total_orders`, 0 when there are no orders
    pub average_order_value: f64,
}

impl RevenueRollup {
    /// Rollup with no qualifying orders
    pub fn zero() -> Self {
        Self {
            total_earnings: 0.0,
            total_orders: 0,
            total_units_sold: 0,
            average_order_value: 0.0,
        }
    }
}

/// Compute the revenue rollup over a slice of orders
///
/// Orders are expected to be pre-filtered (delivered, non-deleted, involving
/// the supplier), but every condition is re-checked so a looser scan cannot
/// skew the numbers.
pub fn revenue_rollup(orders: &[Order], supplier: &SupplierId) -> RevenueRollup {
    let mut total_earnings = 0.0_f64;
    let mut total_orders = 0_u64;
    let mut total_units_sold = 0_u64;

    for order in orders {
        if order.deleted || order.status != OrderStatus::Delivered {
            continue;
        }

        let mut matched = false;
        for item in order.items_for_supplier(supplier) {
            total_earnings += item.line_total();
            total_units_sold += u64::from(item.quantity);
            matched = true;
        }

        // Distinct orders, not line items
        if matched {
            total_orders += 1;
        }
    }

    let average_order_value = if total_orders > 0 {
        total_earnings / total_orders as f64
    } else {
        0.0
    };

    RevenueRollup {
        total_earnings,
        total_orders,
        total_units_sold,
        average_order_value,
    }
}
