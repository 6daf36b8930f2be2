//! Pulse Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use pulse_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[dashboard]\nseries_days = 30").unwrap();
//! assert_eq!(config.dashboard.series_days, 30);
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [log]
//! level = "info"
//! format = "console"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 4600
//!
//! [dashboard]
//! series_days = 7
//! top_products = 5
//!
//! [catalog]
//! categories = ["cement", "steel", "timber"]
//! locations = ["north", "south"]
//! ```

mod catalog;
mod dashboard;
mod error;
mod logging;
mod server;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use catalog::CatalogConfig;
pub use dashboard::DashboardConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use server::ServerConfig;

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Dashboard defaults (series length, top-K)
    pub dashboard: DashboardConfig,

    /// Catalog keyword lists, threaded explicitly instead of living as
    /// module-level state
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.server.port, 4600);
        assert_eq!(config.dashboard.series_days, 7);
        assert_eq!(config.dashboard.top_products, 5);
        assert!(config.catalog.categories.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str(
            "[dashboard]\nseries_days = 30\n\n[catalog]\ncategories = [\"cement\"]",
        )
        .unwrap();
        assert_eq!(config.dashboard.series_days, 30);
        assert_eq!(config.dashboard.top_products, 5);
        assert_eq!(config.catalog.categories, vec!["cement"]);
    }

    #[test]
    fn test_invalid_knobs_rejected() {
        assert!(Config::from_str("[dashboard]\nseries_days = 0").is_err());
        assert!(Config::from_str("[dashboard]\ntop_products = 0").is_err());
        assert!(Config::from_str("[server]\nhost = \"\"").is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(Config::from_str("[dashboard").is_err());
    }
}
