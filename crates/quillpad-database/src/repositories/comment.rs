//! Comment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use quillpad_core::error::{AppError, ErrorKind};
use quillpad_core::result::AppResult;
use quillpad_entity::comment::{Comment, CommentWithAuthor, CreateComment};

/// Repository for comment persistence and queries.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a comment to a post.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, author_id, text) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.post_id)
        .bind(data.author_id)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// Find a comment by primary key, joined with its author.
    pub async fn find_with_author(&self, id: Uuid) -> AppResult<Option<CommentWithAuthor>> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.author_id, u.username AS author_username, \
                    u.display_name AS author_display_name, c.text, c.created_at \
             FROM comments c \
             JOIN users u ON u.id = c.author_id \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// All comments for a post, oldest first.
    pub async fn list_for_post(&self, post_id: Uuid) -> AppResult<Vec<CommentWithAuthor>> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.author_id, u.username AS author_username, \
                    u.display_name AS author_display_name, c.text, c.created_at \
             FROM comments c \
             JOIN users u ON u.id = c.author_id \
             WHERE c.post_id = $1 \
             ORDER BY c.created_at ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Delete a comment by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
