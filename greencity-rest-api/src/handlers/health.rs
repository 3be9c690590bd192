//! Health check handler

use axum::response::IntoResponse;
use greencity_web::ok;

use crate::models::HealthResponse;

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    ok(HealthResponse::healthy())
}
