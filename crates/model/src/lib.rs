//! Pulse domain records
//!
//! Typed records for the marketplace data the analytics engine reads:
//! orders with per-supplier line items, and supplier-owned products.
//!
//! Everything here is read-only from the engine's point of view. Records are
//! built through validated constructors at the data-source boundary so the
//! aggregation code never handles loosely-typed maps.

pub mod error;
pub mod ids;
pub mod order;
pub mod product;


pub use error::{ModelError, Result};
pub use ids::{CustomerId, OrderId, ProductId, SupplierId};
pub use order::{LineItem, Order, OrderStatus};
pub use product::Product;
