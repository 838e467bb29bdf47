//! Health check handler.

use axum::Json;
use axum::extract::State;

use quillpad_core::error::AppError;
use quillpad_core::traits::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health — liveness plus component checks.
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(1) => "ok",
        _ => "unavailable",
    };

    let cache = match state.cache.health_check().await {
        Ok(true) => "ok",
        _ => "unavailable",
    };

    let status = if database == "ok" && cache == "ok" {
        "ok"
    } else {
        "degraded"
    };

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        cache: cache.to_string(),
    })))
}
