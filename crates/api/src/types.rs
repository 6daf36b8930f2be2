//! API request and response types
//!
//! Query parameter structs with validated converters, and the response
//! wrapper shared by all endpoints.

use pulse_analytics::TimeRange;
use pulse_model::SupplierId;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Parse a supplier path segment
pub fn parse_supplier(raw: &str) -> Result<SupplierId> {
    SupplierId::new(raw).map_err(|e| ApiError::InvalidSupplier(e.to_string()))
}

/// Query parameters for the full dashboard
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardParams {
    /// Length of the daily series; falls back to the configured default
    pub days: Option<u32>,
    /// Leaderboard size; falls back to the configured default
    pub limit: Option<usize>,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            days: None,
            limit: None,
        }
    }
}

/// Query parameters for windowed rollup/leaderboard endpoints
#[derive(Debug, Deserialize)]
pub struct WindowParams {
    /// Optional time window (e.g. "7d", "2026-01-01,2026-01-31");
    /// absent means lifetime
    pub range: Option<String>,
}

impl WindowParams {
    /// Convert to an optional analytics window
    pub fn to_window(&self) -> Result<Option<TimeRange>> {
        match &self.range {
            Some(raw) => {
                let range = TimeRange::parse(raw)
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                Ok(Some(range))
            }
            None => Ok(None),
        }
    }
}

/// Query parameters for the daily series endpoint
#[derive(Debug, Deserialize)]
pub struct SeriesParams {
    /// Series length in days
    pub days: Option<u32>,
}

/// Query parameters for the top-products endpoint
#[derive(Debug, Deserialize)]
pub struct TopParams {
    /// Optional time window; absent means lifetime
    pub range: Option<String>,
    /// Leaderboard size
    pub limit: Option<usize>,
}

impl TopParams {
    /// Convert to an optional analytics window
    pub fn to_window(&self) -> Result<Option<TimeRange>> {
        WindowParams {
            range: self.range.clone(),
        }
        .to_window()
    }
}

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap response data
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
