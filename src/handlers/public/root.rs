use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::STORAGE_UNAVAILABLE;
use crate::state::AppState;

/// GET / - liveness probe, empty body
pub async fn root() -> StatusCode {
    StatusCode::OK
}

/// GET /health - reports whether the talker document is readable
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health().await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "talkers": count
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "message": STORAGE_UNAVAILABLE
                })),
            )
        }
    }
}
