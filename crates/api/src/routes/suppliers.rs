//! Supplier analytics routes
//!
//! Endpoints for the supplier dashboard:
//! - Full dashboard DTO
//! - Revenue rollup (lifetime or windowed)
//! - Daily earnings series
//! - Top products

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use pulse_analytics::{DailySeries, RevenueRollup, SupplierDashboard, TopProductEntry};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{parse_supplier, ApiResponse, DashboardParams, SeriesParams, TopParams, WindowParams};

/// Build the supplier analytics router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{supplier_id}/dashboard", get(get_dashboard))
        .route("/{supplier_id}/revenue", get(get_revenue))
        .route("/{supplier_id}/sales/daily", get(get_daily_sales))
        .route("/{supplier_id}/products/top", get(get_top_products))
}

/// GET /api/v1/suppliers/{supplier_id}/dashboard - Full dashboard
async fn get_dashboard(
    State(state): State<AppState>,
    Path(supplier_id): Path<String>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<ApiResponse<SupplierDashboard>>> {
    let supplier = parse_supplier(&supplier_id)?;
    let days = params.days.unwrap_or(state.dashboard.series_days);
    let limit = params.limit.unwrap_or(state.dashboard.top_products);

    let data = state.engine.dashboard(&supplier, days, limit).await?;
    Ok(Json(ApiResponse::new(data)))
}

/// GET /api/v1/suppliers/{supplier_id}/revenue - Revenue rollup
async fn get_revenue(
    State(state): State<AppState>,
    Path(supplier_id): Path<String>,
    Query(params): Query<WindowParams>,
) -> Result<Json<ApiResponse<RevenueRollup>>> {
    let supplier = parse_supplier(&supplier_id)?;
    let window = params.to_window()?;

    let data = state.engine.revenue(&supplier, window).await?;
    Ok(Json(ApiResponse::new(data)))
}

/// GET /api/v1/suppliers/{supplier_id}/sales/daily - Daily earnings series
async fn get_daily_sales(
    State(state): State<AppState>,
    Path(supplier_id): Path<String>,
    Query(params): Query<SeriesParams>,
) -> Result<Json<ApiResponse<DailySeries>>> {
    let supplier = parse_supplier(&supplier_id)?;
    let days = params.days.unwrap_or(state.dashboard.series_days);

    let data = state.engine.daily_sales(&supplier, days).await?;
    Ok(Json(ApiResponse::new(data)))
}

/// GET /api/v1/suppliers/{supplier_id}/products/top - Top products
async fn get_top_products(
    State(state): State<AppState>,
    Path(supplier_id): Path<String>,
    Query(params): Query<TopParams>,
) -> Result<Json<ApiResponse<Vec<TopProductEntry>>>> {
    let supplier = parse_supplier(&supplier_id)?;
    let window = params.to_window()?;
    let limit = params.limit.unwrap_or(state.dashboard.top_products);

    let data = state.engine.top_products(&supplier, limit, window).await?;
    Ok(Json(ApiResponse::new(data)))
}
