use axum::Json;

use forecaster_core::types::HealthStatus;

/// Health check endpoint.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
