//! Operations routes

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Build the operations router
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health response body
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    store: &'static str,
}

/// GET /health - check the engine's data source
async fn health(State(state): State<AppState>) -> Result<Json<Health>> {
    state
        .engine
        .store()
        .health_check()
        .await
        .map_err(|e| ApiError::StoreUnavailable(e.to_string()))?;

    Ok(Json(Health {
        status: "ok",
        store: state.engine.store_name(),
    }))
}
