//! Top products metric

use async_trait::async_trait;

use pulse_model::{OrderStatus, SupplierId};
use pulse_store::{DataSource, OrderQuery};

use crate::error::{AnalyticsError, Result};
use crate::metrics::Metric;
use crate::timerange::TimeRange;
use crate::top::{top_products, TopProductEntry};

/// Revenue-ranked product leaderboard
pub struct TopProductsMetric {
    limit: usize,
    window: Option<TimeRange>,
}

impl TopProductsMetric {
    /// Top `limit` products, optionally restricted to a window
    pub fn new(limit: usize, window: Option<TimeRange>) -> Result<Self> {
        if limit == 0 {
            return Err(AnalyticsError::InvalidLimit(
                "limit must be positive".to_string(),
            ));
        }
        Ok(Self { limit, window })
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
impl Metric for TopProductsMetric {
    type Output = Vec<TopProductEntry>;

    async fn execute(
        &self,
        store: &dyn DataSource,
        supplier: &SupplierId,
    ) -> Result<Vec<TopProductEntry>> {
        let orders = store.orders(&self.query(supplier)).await?;
        Ok(top_products(&orders, supplier, self.limit))
    }

    fn name(&self) -> &'static str {
        "top_products"
    }
}
