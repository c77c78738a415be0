//! Liveness and health endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::warn;

use crate::error::ApiError;
use crate::AppState;

/// Plain-text liveness probe.
pub async fn root() -> &'static str {
    "Notes API is running"
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

impl HealthResponse {
    fn new(status: &str, database: &str) -> Self {
        Self {
            status: status.to_string(),
            database: database.to_string(),
        }
    }
}

/// Health check including a store round trip.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.notes.health().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::new("ok", "ok"))),
        Err(e) => {
            warn!(subsystem = "api", error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new("degraded", "unavailable")),
            )
        }
    }
}

/// Fallback for unrecognized routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
