//! Pulse Analytics Engine
//!
//! Supplier-facing revenue analytics over marketplace order/product data.
//!
//! # Overview
//!
//! This crate is the aggregation core for Pulse, built on top of
//! `pulse-store`. It includes:
//!
//! - **Time ranges**: Trailing windows, predefined ranges, UTC calendar bucketing
//! - **Rollups**: Earnings, order counts, units sold, average order value
//! - **Time Series**: Fixed-length daily sales series for charting
//! - **Rankings**: Top products by revenue
//! - **Dashboard**: Concurrent assembly of the full supplier dashboard DTO
//!
//! # Usage
//!
//! ```ignore
//! use pulse_analytics::{AnalyticsEngine, TimeRange};
//!
//! let engine = AnalyticsEngine::new(store);
//!
//! // Lifetime rollup
//! let rollup = engine.revenue(&supplier, None).await?;
//!
//! // Last 30 days
//! let window = TimeRange::parse("30d")?;
//! let rollup = engine.revenue(&supplier, Some(window)).await?;
//!
//! // Full dashboard (rollup, series, top products, catalog stats)
//! let dashboard = engine.dashboard(&supplier, 7, 5).await?;
//! ```
//!
//! # Calendar policy
//!
//! All day boundaries are UTC. See [`timerange`] for the single place where
//! day bucketing and labels are defined.

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod rollup;
pub mod series;
pub mod timerange;
pub mod top;

#[cfg(test)]
mod rollup_test;
#[cfg(test)]
mod timerange_test;
#[cfg(test)]
mod top_test;

// Re-exports for convenience
pub use catalog::CatalogStats;
pub use dashboard::SupplierDashboard;
pub use error::{AnalyticsError, Result};
pub use metrics::{
    AnalyticsEngine, CatalogMetric, DailySalesMetric, Metric, RevenueMetric, TopProductsMetric,
};
pub use rollup::RevenueRollup;
pub use series::DailySeries;
pub use timerange::TimeRange;
pub use top::TopProductEntry;
