//! Application builder — wires the crates together into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use quillpad_auth::jwt::{JwtDecoder, JwtEncoder};
use quillpad_auth::password::{PasswordHasher, PasswordValidator};
use quillpad_auth::session::{SessionManager, SessionStore};
use quillpad_cache::provider::CacheManager;
use quillpad_core::config::AppConfig;
use quillpad_core::error::AppError;

use quillpad_database::repositories::comment::CommentRepository;
use quillpad_database::repositories::follow::FollowRepository;
use quillpad_database::repositories::group::GroupRepository;
use quillpad_database::repositories::post::PostRepository;
use quillpad_database::repositories::session::SessionRepository;
use quillpad_database::repositories::user::UserRepository;

use quillpad_service::comment::CommentService;
use quillpad_service::follow::FollowService;
use quillpad_service::group::GroupService;
use quillpad_service::post::PostService;
use quillpad_service::user::UserService;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Construct the full [`AppState`] from configuration and a database pool.
///
/// Used by both the server bootstrap and the integration test harness so
/// the wiring exists exactly once.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let group_repo = Arc::new(GroupRepository::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));
    let follow_repo = Arc::new(FollowRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, Arc::clone(&cache)));
    let session_store = Arc::new(SessionStore::new(
        Arc::clone(&session_repo),
        config.session.clone(),
    ));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&session_store),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.clone(),
    ));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&post_repo),
        Arc::clone(&follow_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let post_service = Arc::new(PostService::new(
        Arc::clone(&post_repo),
        Arc::clone(&group_repo),
        Arc::clone(&user_repo),
        Arc::clone(&cache),
        config.content.clone(),
    ));
    let group_service = Arc::new(GroupService::new(
        Arc::clone(&group_repo),
        Arc::clone(&post_repo),
    ));
    let comment_service = Arc::new(CommentService::new(
        Arc::clone(&comment_repo),
        Arc::clone(&post_repo),
    ));
    let follow_service = Arc::new(FollowService::new(
        Arc::clone(&follow_repo),
        Arc::clone(&user_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        jwt_decoder,
        session_manager,
        user_service,
        post_service,
        group_service,
        comment_service,
        follow_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Runs the Quillpad server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Quillpad server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Quillpad server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
