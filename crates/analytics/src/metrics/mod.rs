//! Metrics engine for supplier analytics
//!
//! Each metric is a small struct that validates its parameters at
//! construction and knows how to fetch and reduce its own data:
//!
//! - **revenue**: Headline rollup (earnings, orders, units, AOV)
//! - **daily_sales**: Fixed-length daily earnings series
//! - **top_products**: Revenue-ranked product leaderboard
//! - **catalog**: Product count and weighted average rating

pub mod catalog;
pub mod daily_sales;
pub mod revenue;
pub mod top_products;

// Re-exports for convenience
pub use catalog::CatalogMetric;
pub use daily_sales::DailySalesMetric;
pub use revenue::RevenueMetric;
pub use top_products::TopProductsMetric;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pulse_model::SupplierId;
use pulse_store::DataSource;

use crate::catalog::round_rating;
use crate::dashboard::SupplierDashboard;
use crate::error::Result;
use crate::rollup::RevenueRollup;
use crate::series::DailySeries;
use crate::timerange::TimeRange;
use crate::top::TopProductEntry;

/// A metric that can be executed against a data source
///
/// Unlike a uniform time-series interface, each metric declares its own
/// output type; the engine stays generic over them.
#[async_trait]
pub trait Metric: Send + Sync {
    /// What this metric produces
    type Output;

    /// Execute this metric for one supplier
    async fn execute(&self, store: &dyn DataSource, supplier: &SupplierId)
        -> Result<Self::Output>;

    /// Metric name for logging/identification
    fn name(&self) -> &'static str;
}

/// Analytics engine for supplier dashboards
///
/// Pure computation over whatever snapshot the store returns: no caching, no
/// retries, no side effects, so every call is safely re-invokable.
pub struct AnalyticsEngine {
    store: Arc<dyn DataSource>,
}

impl AnalyticsEngine {
    /// Create a new engine over a data source
    pub fn new(store: Arc<dyn DataSource>) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying data source
    pub fn store(&self) -> &dyn DataSource {
        self.store.as_ref()
    }

    /// Execute any metric
    pub async fn execute<M: Metric>(
        &self,
        metric: &M,
        supplier: &SupplierId,
    ) -> Result<M::Output> {
        metric.execute(self.store.as_ref(), supplier).await
    }

    /// Revenue rollup, optionally restricted to a window
    pub async fn revenue(
        &self,
        supplier: &SupplierId,
        window: Option<TimeRange>,
    ) -> Result<RevenueRollup> {
        let metric = RevenueMetric::new(window);
        self.execute(&metric, supplier).await
    }

    /// Daily earnings series over the trailing `days` UTC calendar days
    pub async fn daily_sales(&self, supplier: &SupplierId, days: u32) -> Result<DailySeries> {
        let metric = DailySalesMetric::new(days)?;
        self.execute(&metric, supplier).await
    }

    /// Top products by delivered revenue, optionally restricted to a window
    pub async fn top_products(
        &self,
        supplier: &SupplierId,
        limit: usize,
        window: Option<TimeRange>,
    ) -> Result<Vec<TopProductEntry>> {
        let metric = TopProductsMetric::new(limit, window)?;
        self.execute(&metric, supplier).await
    }

    /// Product count and weighted average rating
    pub async fn catalog(&self, supplier: &SupplierId) -> Result<crate::catalog::CatalogStats> {
        self.execute(&CatalogMetric, supplier).await
    }

    /// Assemble the full supplier dashboard
    ///
    /// Validates all parameters before touching the store, then runs the four
    /// reads concurrently. Assembly is all-or-nothing: the first failure
    /// cancels the rest and the caller never sees a partially populated DTO.
    pub async fn dashboard(
        &self,
        supplier: &SupplierId,
        days: u32,
        top_limit: usize,
    ) -> Result<SupplierDashboard> {
        // Reject bad input before any data access
        let series_metric = DailySalesMetric::at(days, Utc::now())?;
        let revenue_metric = RevenueMetric::lifetime();
        let top_metric = TopProductsMetric::new(top_limit, None)?;

        let store = self.store.as_ref();
        let (rollup, series, top, catalog) = tokio::try_join!(
            revenue_metric.execute(store, supplier),
            series_metric.execute(store, supplier),
            top_metric.execute(store, supplier),
            CatalogMetric.execute(store, supplier),
        )?;

        Ok(SupplierDashboard {
            total_products: catalog.total_products,
            total_earnings: rollup.total_earnings,
            total_orders: rollup.total_orders,
            average_order_value: rollup.average_order_value,
            total_products_sold: rollup.total_units_sold,
            average_rating: round_rating(catalog.average_rating),
            top_products: top,
            daily_series: series,
        })
    }

    /// Get the backend name
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }
}
