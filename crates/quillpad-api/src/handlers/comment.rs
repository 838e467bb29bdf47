//! Comment handlers — list, add, delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use quillpad_core::error::AppError;

use crate::dto::request::CommentRequest;
use crate::dto::response::{ApiResponse, CommentResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/posts/{id}/comments — comments on a post, oldest first.
pub async fn list(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CommentResponse>>>, AppError> {
    let comments = state.comment_service.list(post_id).await?;

    Ok(Json(ApiResponse::ok(
        comments.into_iter().map(Into::into).collect(),
    )))
}

/// POST /api/posts/{id}/comments — add a comment.
pub async fn add(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let comment = state.comment_service.add(&auth.ctx, post_id, &req.text).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment.into()))))
}

/// DELETE /api/comments/{id} — delete own comment.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.comment_service.delete(&auth.ctx, comment_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Comment deleted".to_string(),
    })))
}
