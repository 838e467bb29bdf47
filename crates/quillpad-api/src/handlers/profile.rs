//! Profile handlers — profile page, author feed, profile editing.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use quillpad_core::error::AppError;
use quillpad_core::types::pagination::PageResponse;
use quillpad_service::user::service::UpdateProfileRequest as ServiceUpdateProfile;

use crate::dto::request::{ChangePasswordRequest, UpdateProfileRequest};
use crate::dto::response::{
    ApiResponse, MessageResponse, PostResponse, ProfileResponse, UserResponse,
};
use crate::extractors::{AuthUser, MaybeAuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/users/{username} — public profile.
///
/// When the request carries a valid access token, the `following` flag
/// reflects whether that viewer follows the profiled author.
pub async fn profile(
    State(state): State<AppState>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let viewer_id = viewer.map(|auth| auth.ctx.user_id);
    let view = state.user_service.profile(&username, viewer_id).await?;

    Ok(Json(ApiResponse::ok(view.into())))
}

/// GET /api/users/{username}/posts — an author's posts.
pub async fn posts(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PostResponse>>>, AppError> {
    let page = params.page_request(state.config.content.posts_per_page);
    let posts = state.post_service.by_author(&username, &page).await?;

    Ok(Json(ApiResponse::ok(posts.map(Into::into))))
}

/// PUT /api/users/me — update own profile.
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .update_profile(
            &auth.ctx,
            ServiceUpdateProfile {
                display_name: req.display_name,
                email: req.email,
                bio: req.bio,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me/password — change own password.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state
        .user_service
        .change_password(&auth.ctx, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed".to_string(),
    })))
}
