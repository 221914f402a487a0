//! HTTP API server for hubstats.

pub mod api_error;
mod auth;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;

use hubstats_service::DashboardService;

pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Usage-analytics aggregation service.
    pub dashboard: Arc<DashboardService>,
    /// Bearer token required on every dashboard route. `None` fails closed.
    pub admin_token: Option<String>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let dashboard = Router::new()
        .route("/api/dashboard/overview", get(handlers::dashboard::overview))
        .route("/api/dashboard/users/storage", get(handlers::dashboard::users_storage))
        .route("/api/dashboard/groups/activity", get(handlers::dashboard::groups_activity))
        .route("/api/dashboard/content/types", get(handlers::dashboard::content_types))
        .route("/api/dashboard/time-series", get(handlers::dashboard::time_series))
        .route_layer(middleware::from_fn_with_state(Arc::clone(&state), auth::require_admin));

    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .merge(dashboard)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
