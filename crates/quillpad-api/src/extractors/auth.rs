//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it against the session, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use quillpad_auth::jwt::Claims;
use quillpad_core::error::AppError;
use quillpad_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The request context built from the validated claims.
    pub ctx: RequestContext,
    /// The validated access token claims (needed for logout).
    pub claims: Claims,
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        // Decode and validate JWT
        let claims = state.jwt_decoder.decode_access_token(token).await?;

        // Validate session is still active
        let _session = state.session_manager.validate_session(claims.sid).await?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let ctx = RequestContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.username.clone(),
            ip_address,
            user_agent,
        );

        Ok(AuthUser { ctx, claims })
    }
}

/// Optional variant of [`AuthUser`] for endpoints that render differently for
/// authenticated viewers but remain public (e.g. profiles).
///
/// A missing Authorization header yields `None`; a *present but invalid*
/// credential is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(MaybeAuthUser(None));
        }

        let auth = AuthUser::from_request_parts(parts, state).await?;
        Ok(MaybeAuthUser(Some(auth)))
    }
}
