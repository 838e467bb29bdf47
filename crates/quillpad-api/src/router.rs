//! Route definitions for the Quillpad HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(post_routes())
        .merge(group_routes())
        .merge(user_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: register, login, logout, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Post feeds, CRUD, and comments
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(handlers::post::index))
        .route("/posts", post(handlers::post::create))
        .route("/posts/{id}", get(handlers::post::detail))
        .route("/posts/{id}", put(handlers::post::update))
        .route("/posts/{id}", delete(handlers::post::delete))
        .route("/posts/{id}/comments", get(handlers::comment::list))
        .route("/posts/{id}/comments", post(handlers::comment::add))
        .route("/comments/{id}", delete(handlers::comment::delete))
        .route("/feed", get(handlers::post::feed))
}

/// Group directory and group feeds
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(handlers::group::list))
        .route("/groups/{slug}", get(handlers::group::get))
        .route("/groups/{slug}/posts", get(handlers::group::posts))
}

/// Profiles, author feeds, and follows
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", put(handlers::profile::update_me))
        .route(
            "/users/me/password",
            put(handlers::profile::change_password),
        )
        .route("/users/{username}", get(handlers::profile::profile))
        .route("/users/{username}/posts", get(handlers::profile::posts))
        .route("/users/{username}/follow", put(handlers::follow::follow))
        .route(
            "/users/{username}/follow",
            delete(handlers::follow::unfollow),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
