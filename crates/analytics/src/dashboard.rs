//! Supplier dashboard DTO
//!
//! The single response object the dashboard page renders. Built by
//! [`crate::metrics::AnalyticsEngine::dashboard`]; never persisted.
//!
//! Rounding happens exactly once, here: `average_rating` carries one decimal,
//! every currency figure stays at full precision for the presentation layer
//! to format.

use serde::Serialize;

use crate::series::DailySeries;
use crate::top::TopProductEntry;

/// Everything the supplier dashboard shows, in one snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDashboard {
    /// Active products in the catalog
    pub total_products: u64,
    /// Lifetime delivered earnings, unrounded
    pub total_earnings: f64,
    /// Lifetime distinct delivered orders
    pub total_orders: u64,
    /// Earnings per order, 0 with no orders, unrounded
    pub average_order_value: f64,
    /// Lifetime units delivered
    pub total_products_sold: u64,
    /// Review-count-weighted rating, one decimal
    pub average_rating: f64,
    /// Revenue leaderboard, at most K entries, descending
    pub top_products: Vec<TopProductEntry>,
    /// Trailing N-day earnings chart
    pub daily_series: DailySeries,
}
