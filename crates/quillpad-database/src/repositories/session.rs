//! Session repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use quillpad_core::error::{AppError, ErrorKind};
use quillpad_core::result::AppResult;
use quillpad_entity::session::{CreateSession, Session};

/// Repository for login session persistence.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new session.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, refresh_jti, ip_address, user_agent, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.refresh_jti)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a session by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Mark a session as revoked.
    pub async fn revoke(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke session", e)
            })?;
        Ok(())
    }

    /// Replace the refresh token JTI after a refresh.
    pub async fn rotate_refresh_jti(&self, id: Uuid, new_jti: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE sessions SET refresh_jti = $2, last_seen_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(new_jti)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to rotate refresh token", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Session {id} not found")));
        }
        Ok(())
    }

    /// Update the last-seen timestamp.
    pub async fn touch(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_seen_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch session", e))?;
        Ok(())
    }

    /// Delete sessions that expired before now. Returns the number removed.
    pub async fn delete_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
