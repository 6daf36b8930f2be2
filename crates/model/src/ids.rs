//! Opaque identifier newtypes
//!
//! Ids are stable opaque strings assigned by the upstream store. They are
//! compared and ordered as plain strings; ordering matters only for
//! deterministic tie-breaking in rankings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from a non-empty string
            pub fn new(id: impl Into<String>) -> Result<Self> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ModelError::InvalidId(format!(
                        "{} must not be empty",
                        stringify!($name)
                    )));
                }
                Ok(Self(id))
            }

            /// The raw identifier string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of an order
    OrderId
);
id_type!(
    /// Identifier of a product
    ProductId
);
id_type!(
    /// Identifier of a supplier
    SupplierId
);
id_type!(
    /// Identifier of a customer
    CustomerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_rejects_empty() {
        assert!(SupplierId::new("").is_err());
        assert!(SupplierId::new("   ").is_err());
        assert!(SupplierId::new("sup-1").is_ok());
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("prod-9").unwrap();
        assert_eq!(id.to_string(), "prod-9");
        assert_eq!(id.as_str(), "prod-9");
    }

    #[test]
    fn test_id_ordering_is_lexicographic() {
        let a = ProductId::new("p-a").unwrap();
        let b = ProductId::new("p-b").unwrap();
        assert!(a < b);
    }
}
