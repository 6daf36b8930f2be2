//! Daily sales series metric

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pulse_model::{OrderStatus, SupplierId};
use pulse_store::{DataSource, OrderQuery};

use crate::error::Result;
use crate::metrics::Metric;
use crate::series::{daily_series, DailySeries};
use crate::timerange::TimeRange;

/// Daily earnings series over the trailing `days` calendar days
pub struct DailySalesMetric {
    days: u32,
    now: DateTime<Utc>,
}

impl DailySalesMetric {
    /// Series ending today (UTC)
    pub fn new(days: u32) -> Result<Self> {
        Self::at(days, Utc::now())
    }

    /// Series ending on `now`'s UTC date
    ///
    /// The explicit instant keeps the series window aligned with any rollup
    /// built from the same `now`, and makes tests deterministic.
    pub fn at(days: u32, now: DateTime<Utc>) -> Result<Self> {
        // Validates days > 0
        TimeRange::trailing_days(days, now)?;
        Ok(Self { days, now })
    }

    fn query(&self, supplier: &SupplierId) -> Result<OrderQuery> {
        let window = TimeRange::trailing_days(self.days, self.now)?;
        Ok(OrderQuery::for_supplier(supplier.clone())
            .with_status(OrderStatus::Delivered)
            .with_window(window.start, window.end))
    }
}

#[async_trait]
impl Metric for DailySalesMetric {
    type Output = DailySeries;

    async fn execute(
        &self,
        store: &dyn DataSource,
        supplier: &SupplierId,
    ) -> Result<DailySeries> {
        let orders = store.orders(&self.query(supplier)?).await?;
        Ok(daily_series(&orders, supplier, self.days, self.now))
    }

    fn name(&self) -> &'static str {
        "daily_sales"
    }
}
