use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status. Always `healthy`: this is a liveness
    /// probe, independent of upstream or database reachability.
    pub status: &'static str,
    /// Service name for deployment monitoring.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health/ (and /) -- liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "devsite",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the liveness routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/health/", get(health_check))
}
