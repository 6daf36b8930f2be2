//! Catalog keyword lists
//!
//! Category and location vocabularies consumed by search and categorization
//! features upstream. Loaded once at startup and passed where needed.

use serde::Deserialize;

/// Catalog vocabulary configuration
///
/// # Example
///
/// ```toml
/// [catalog]
/// categories = ["cement", "steel", "timber", "aggregate"]
/// locations = ["north", "south", "east", "west"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Known product categories
    pub categories: Vec<String>,
    /// Known supplier locations
    pub locations: Vec<String>,
}

impl CatalogConfig {
    /// Whether a category is in the configured vocabulary
    ///
    /// An empty vocabulary accepts everything.
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.is_empty()
            || self
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(category))
    }
}
