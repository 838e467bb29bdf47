//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use quillpad_auth::jwt::decoder::JwtDecoder;
use quillpad_auth::session::manager::SessionManager;
use quillpad_cache::provider::CacheManager;
use quillpad_core::config::AppConfig;

use quillpad_service::comment::CommentService;
use quillpad_service::follow::FollowService;
use quillpad_service::group::GroupService;
use quillpad_service::post::PostService;
use quillpad_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// User accounts and profiles.
    pub user_service: Arc<UserService>,
    /// Posts and feeds.
    pub post_service: Arc<PostService>,
    /// Group directory.
    pub group_service: Arc<GroupService>,
    /// Comments.
    pub comment_service: Arc<CommentService>,
    /// Follows.
    pub follow_service: Arc<FollowService>,
}
