//! Dashboard defaults

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default shape of the supplier dashboard
///
/// # Example
///
/// ```toml
/// [dashboard]
/// series_days = 7
/// top_products = 5
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Length of the daily earnings series
    pub series_days: u32,
    /// Entries in the top-products leaderboard
    pub top_products: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            series_days: 7,
            top_products: 5,
        }
    }
}

impl DashboardConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.series_days == 0 {
            return Err(ConfigError::InvalidValue {
                section: "dashboard",
                field: "series_days",
                message: "must be positive".to_string(),
            });
        }
        if self.top_products == 0 {
            return Err(ConfigError::InvalidValue {
                section: "dashboard",
                field: "top_products",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
