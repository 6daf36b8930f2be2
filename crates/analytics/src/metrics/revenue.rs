//! Revenue rollup metric

use async_trait::async_trait;

use pulse_model::{OrderStatus, SupplierId};
use pulse_store::{DataSource, OrderQuery};

use crate::error::Result;
use crate::metrics::Metric;
use crate::rollup::{revenue_rollup, RevenueRollup};
use crate::timerange::TimeRange;

/// Headline revenue rollup over delivered orders
pub struct RevenueMetric {
    window: Option<TimeRange>,
}

impl RevenueMetric {
    /// Rollup restricted to an optional window
    pub fn new(window: Option<TimeRange>) -> Self {
        Self { window }
    }

    /// Lifetime rollup
    pub fn lifetime() -> Self {
        Self { window: None }
    }

    fn query(&self, supplier: &SupplierId) -> OrderQuery {
        let mut query =
            OrderQuery::for_supplier(supplier.clone()).with_status(OrderStatus::Delivered);
        if let Some(window) = &self.window {
            query = query.with_window(window.start, window.end);
        }
        query
    }
}

#[async_trait]
impl Metric for RevenueMetric {
    type Output = RevenueRollup;

    async fn execute(
        &self,
        store: &dyn DataSource,
        supplier: &SupplierId,
    ) -> Result<RevenueRollup> {
        let orders = store.orders(&self.query(supplier)).await?;
        Ok(revenue_rollup(&orders, supplier))
    }

    fn name(&self) -> &'static str {
        "revenue_rollup"
    }
}
