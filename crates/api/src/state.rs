//! Application state
//!
//! Shared state for API handlers: the analytics engine and the dashboard
//! defaults resolved at startup.

use std::sync::Arc;

use pulse_analytics::AnalyticsEngine;
use pulse_config::DashboardConfig;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// The aggregation engine
    pub engine: Arc<AnalyticsEngine>,
    /// Dashboard defaults (series length, top-K)
    pub dashboard: DashboardConfig,
}

impl AppState {
    /// Create state from an engine and dashboard defaults
    pub fn new(engine: AnalyticsEngine, dashboard: DashboardConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            dashboard,
        }
    }
}
