//! Post handlers — index feed, detail, publish, edit, delete, follow feed.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use quillpad_core::error::AppError;
use quillpad_core::types::pagination::PageResponse;

use crate::dto::request::PostRequest;
use crate::dto::response::{
    ApiResponse, MessageResponse, PostDetailResponse, PostResponse,
};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/posts — the cached global index feed.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PostResponse>>>, AppError> {
    let page = params.page_request(state.config.content.posts_per_page);
    let posts = state.post_service.index(&page).await?;

    Ok(Json(ApiResponse::ok(posts.map(Into::into))))
}

/// GET /api/posts/{id} — post detail with comments.
pub async fn detail(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostDetailResponse>>, AppError> {
    let detail = state.post_service.get(post_id).await?;
    let comments = state.comment_service.list(post_id).await?;

    Ok(Json(ApiResponse::ok(PostDetailResponse {
        post: detail.post.into(),
        author_post_count: detail.author_post_count,
        comments: comments.into_iter().map(Into::into).collect(),
    })))
}

/// POST /api/posts — publish a new post.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state
        .post_service
        .create(&auth.ctx, &req.text, req.group_id, req.image_url)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post.into()))))
}

/// PUT /api/posts/{id} — edit a post (author only).
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(req): Json<PostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state
        .post_service
        .update(&auth.ctx, post_id, &req.text, req.group_id, req.image_url)
        .await?;

    Ok(Json(ApiResponse::ok(post.into())))
}

/// DELETE /api/posts/{id} — delete a post (author only).
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.post_service.delete(&auth.ctx, post_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Post deleted".to_string(),
    })))
}

/// GET /api/feed — posts by authors the current user follows.
pub async fn feed(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PostResponse>>>, AppError> {
    let page = params.page_request(state.config.content.posts_per_page);
    let posts = state.post_service.feed(&auth.ctx, &page).await?;

    Ok(Json(ApiResponse::ok(posts.map(Into::into))))
}
