use axum::{routing::get, Json, Router};
use tourfriend_shared::HealthResponse;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

/// Liveness only; the store is not consulted.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running successfully".to_string(),
        timestamp: chrono::Utc::now(),
    })
}
