//! Follow repository implementation.
//!
//! Follow and unfollow are idempotent at the SQL level: the insert uses
//! `ON CONFLICT DO NOTHING` and the delete reports whether an edge existed.

use sqlx::PgPool;
use uuid::Uuid;

use quillpad_core::error::{AppError, ErrorKind};
use quillpad_core::result::AppResult;

/// Repository for follow edges.
#[derive(Debug, Clone)]
pub struct FollowRepository {
    pool: PgPool,
}

impl FollowRepository {
    /// Create a new follow repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a follow edge. Returns `true` if a new edge was inserted,
    /// `false` if the user already followed the author.
    pub async fn create(&self, user_id: Uuid, author_id: Uuid) -> AppResult<bool> {
        let inserted = sqlx::query_as::<_, (Uuid,)>(
            "INSERT INTO follows (user_id, author_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, author_id) DO NOTHING \
             RETURNING user_id",
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create follow", e))?;

        Ok(inserted.is_some())
    }

    /// Remove a follow edge. Returns `true` if an edge was removed.
    pub async fn delete(&self, user_id: Uuid, author_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id)
            .bind(author_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete follow", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether `user_id` follows `author_id`.
    pub async fn exists(&self, user_id: Uuid, author_id: Uuid) -> AppResult<bool> {
        let found: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2",
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check follow", e))?;

        Ok(found.is_some())
    }

    /// Number of users following this author.
    pub async fn follower_count(&self, author_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count followers", e)
            })?;
        Ok(count as u64)
    }

    /// Number of authors this user follows.
    pub async fn following_count(&self, user_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count following", e)
            })?;
        Ok(count as u64)
    }
}
