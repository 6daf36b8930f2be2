//! Pulse Store - data-source contract for the analytics engine
//!
//! The engine reads orders and products through the [`DataSource`] trait and
//! never prescribes a storage technology: anything that can answer filtered
//! scans satisfies the contract. This crate ships one backend, an in-memory
//! store loadable from a JSON snapshot, used by tests and the offline server
//! mode.
//!
//! # Usage
//!
//! ```ignore
//! use pulse_store::{DataSource, MemoryStore, OrderQuery};
//!
//! let store = MemoryStore::from_snapshot_file("snapshot.json")?;
//! let query = OrderQuery::for_supplier(supplier).with_status(OrderStatus::Delivered);
//! let orders = store.orders(&query).await?;
//! ```

pub mod error;
pub mod memory;
pub mod query;
pub mod source;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, Snapshot};
pub use query::OrderQuery;
pub use source::DataSource;
