//! CLI subcommands

pub mod dashboard;
pub mod serve;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use pulse_analytics::AnalyticsEngine;
use pulse_store::MemoryStore;

/// Build an engine over a JSON snapshot file
pub(crate) fn engine_from_snapshot(path: Option<&Path>) -> Result<AnalyticsEngine> {
    let store = match path {
        Some(path) => MemoryStore::from_snapshot_file(path)
            .with_context(|| format!("failed to load snapshot '{}'", path.display()))?,
        None => MemoryStore::empty(),
    };

    tracing::info!(
        orders = store.order_count(),
        products = store.product_count(),
        "snapshot loaded"
    );

    Ok(AnalyticsEngine::new(Arc::new(store)))
}
