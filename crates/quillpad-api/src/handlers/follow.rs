//! Follow handlers — follow and unfollow an author.

use axum::Json;
use axum::extract::{Path, State};

use quillpad_core::error::AppError;

use crate::dto::response::{ApiResponse, FollowStateResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/users/{username}/follow — follow an author (idempotent).
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<FollowStateResponse>>, AppError> {
    let outcome = state.follow_service.follow(&auth.ctx, &username).await?;

    Ok(Json(ApiResponse::ok(FollowStateResponse {
        following: outcome.following,
        changed: outcome.changed,
    })))
}

/// DELETE /api/users/{username}/follow — unfollow an author (idempotent).
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<FollowStateResponse>>, AppError> {
    let outcome = state.follow_service.unfollow(&auth.ctx, &username).await?;

    Ok(Json(ApiResponse::ok(FollowStateResponse {
        following: outcome.following,
        changed: outcome.changed,
    })))
}
