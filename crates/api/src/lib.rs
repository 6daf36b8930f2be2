//! Pulse API
//!
//! HTTP API for supplier analytics queries.
//!
//! # Overview
//!
//! This crate provides the REST surface over `pulse-analytics`. It's built on
//! Axum; handlers stay thin - parse parameters, call the engine, serialize.
//!
//! # Usage
//!
//! ```ignore
//! use pulse_api::{build_router, AppState};
//! use pulse_analytics::AnalyticsEngine;
//!
//! let engine = AnalyticsEngine::new(store);
//! let state = AppState::new(engine, config.dashboard);
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:4600").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! # Endpoints
//!
//! - `GET /health` - Store health
//! - `GET /api/v1/suppliers/{supplier_id}/dashboard` - Full dashboard DTO
//! - `GET /api/v1/suppliers/{supplier_id}/revenue` - Revenue rollup
//! - `GET /api/v1/suppliers/{supplier_id}/sales/daily` - Daily earnings series
//! - `GET /api/v1/suppliers/{supplier_id}/products/top` - Top products
//!
//! # Query Parameters
//!
//! - `range` - Time window (e.g. "7d", "30d", "2026-01-01,2026-01-31")
//! - `days`  - Series length for trailing-window views
//! - `limit` - Leaderboard size

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, Result};
pub use routes::build_router;
pub use state::AppState;
pub use types::ApiResponse;
