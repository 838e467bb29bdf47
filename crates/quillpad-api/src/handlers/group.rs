//! Group handlers — directory, detail, and group feed.

use axum::Json;
use axum::extract::{Path, Query, State};

use quillpad_core::error::AppError;
use quillpad_core::types::pagination::PageResponse;

use crate::dto::response::{ApiResponse, GroupResponse, PostResponse};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/groups — the group directory.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<GroupResponse>>>, AppError> {
    let page = params.page_request(state.config.content.posts_per_page);
    let groups = state.group_service.list(&page).await?;

    Ok(Json(ApiResponse::ok(groups.map(Into::into))))
}

/// GET /api/groups/{slug} — a single group.
pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<GroupResponse>>, AppError> {
    let group = state.group_service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::ok(group.into())))
}

/// GET /api/groups/{slug}/posts — posts published into a group.
pub async fn posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PostResponse>>>, AppError> {
    let page = params.page_request(state.config.content.posts_per_page);
    let (_group, posts) = state.group_service.posts(&slug, &page).await?;

    Ok(Json(ApiResponse::ok(posts.map(Into::into))))
}
