//! Session storage operations wrapping the database repository.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use quillpad_core::config::session::SessionConfig;
use quillpad_core::error::AppError;
use quillpad_database::repositories::session::SessionRepository;
use quillpad_entity::session::{CreateSession, Session};

/// Abstracts session persistence operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>, config: SessionConfig) -> Self {
        Self { repo, config }
    }

    /// Creates a new session record in the database.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        refresh_jti: Uuid,
        ip_address: &str,
        user_agent: Option<&str>,
    ) -> Result<Session, AppError> {
        let expires_at = Utc::now() + Duration::hours(self.config.absolute_ttl_hours as i64);

        self.repo
            .create(&CreateSession {
                user_id,
                refresh_jti,
                ip_address: ip_address.to_string(),
                user_agent: user_agent.map(String::from),
                expires_at,
            })
            .await
    }

    /// Finds a session by ID.
    pub async fn find_by_id(&self, session_id: Uuid) -> Result<Option<Session>, AppError> {
        self.repo.find_by_id(session_id).await
    }

    /// Marks a session as revoked.
    pub async fn revoke(&self, session_id: Uuid) -> Result<(), AppError> {
        self.repo.revoke(session_id).await
    }

    /// Replaces the session's refresh token JTI after a refresh.
    pub async fn rotate_refresh_jti(&self, session_id: Uuid, new_jti: Uuid) -> Result<(), AppError> {
        self.repo.rotate_refresh_jti(session_id, new_jti).await
    }

    /// Updates the session's last-seen timestamp.
    pub async fn touch(&self, session_id: Uuid) -> Result<(), AppError> {
        self.repo.touch(session_id).await
    }
}
