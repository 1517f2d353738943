//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - Constant liveness indicator
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
