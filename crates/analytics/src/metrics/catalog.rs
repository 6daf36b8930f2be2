//! Catalog stats metric

use async_trait::async_trait;

use pulse_model::SupplierId;
use pulse_store::DataSource;

use crate::catalog::{catalog_stats, CatalogStats};
use crate::error::Result;
use crate::metrics::Metric;

/// Product count and weighted average rating
pub struct CatalogMetric;

#[async_trait]
impl Metric for CatalogMetric {
    type Output = CatalogStats;

    async fn execute(
        &self,
        store: &dyn DataSource,
        supplier: &SupplierId,
    ) -> Result<CatalogStats> {
        let products = store.products(supplier).await?;
        Ok(catalog_stats(&products))
    }

    fn name(&self) -> &'static str {
        "catalog_stats"
    }
}
