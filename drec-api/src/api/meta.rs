//! Service banner, ping and database connectivity probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

/// GET /
///
/// Service identification banner.
pub async fn service_banner() -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "name": "DreamRecords API",
        "time": Utc::now().to_rfc3339(),
    }))
}

/// GET /v1/ping
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({
        "pong": true,
        "time": Utc::now().to_rfc3339(),
    }))
}

/// GET /v1/db-check
///
/// Database connectivity probe. Unlike the list endpoints this does not
/// degrade to sample data; an unreachable store reports a 500.
pub async fn db_check(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(&state.db).await {
        Ok(one) => (
            StatusCode::OK,
            Json(json!({
                "ok": one == 1,
                "driver": "sqlite",
                "time": Utc::now().to_rfc3339(),
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "ok": false,
                "error": "DB connect failed",
                "message": e.to_string(),
            })),
        ),
    }
}

/// Fallback handler for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
