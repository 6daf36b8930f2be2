//! API routes

pub mod ops;
pub mod suppliers;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Operations routes (health - no auth)
        .merge(ops::routes())
        // Supplier analytics
        .nest("/api/v1/suppliers", suppliers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
