//! Post repository implementation.
//!
//! Feed queries return [`PostWithMeta`] — the post joined with its author,
//! group, and comment count — so handlers never need follow-up lookups.

use sqlx::PgPool;
use uuid::Uuid;

use quillpad_core::error::{AppError, ErrorKind};
use quillpad_core::result::AppResult;
use quillpad_core::types::pagination::{PageRequest, PageResponse};
use quillpad_entity::post::{CreatePost, Post, PostWithMeta, UpdatePost};

/// Shared SELECT for the joined post shape.
const META_SELECT: &str = "SELECT p.id, p.author_id, u.username AS author_username, \
     u.display_name AS author_display_name, p.group_id, g.title AS group_title, \
     g.slug AS group_slug, p.text, p.image_url, \
     (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count, \
     p.created_at, p.updated_at \
     FROM posts p \
     JOIN users u ON u.id = p.author_id \
     LEFT JOIN groups g ON g.id = p.group_id";

/// Repository for post CRUD and feed queries.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by id", e))
    }

    /// Find a post by primary key, joined with author/group/comment count.
    pub async fn find_with_meta(&self, id: Uuid) -> AppResult<Option<PostWithMeta>> {
        let query = format!("{META_SELECT} WHERE p.id = $1");
        sqlx::query_as::<_, PostWithMeta>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// The global index feed: every post, newest first.
    pub async fn page_all(&self, page: &PageRequest) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;

        let query = format!("{META_SELECT} ORDER BY p.created_at DESC LIMIT $1 OFFSET $2");
        let posts = sqlx::query_as::<_, PostWithMeta>(&query)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Posts published into a group, newest first.
    pub async fn page_by_group(
        &self,
        group_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE group_id = $1")
            .bind(group_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count group posts", e)
            })?;

        let query = format!(
            "{META_SELECT} WHERE p.group_id = $1 ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        );
        let posts = sqlx::query_as::<_, PostWithMeta>(&query)
            .bind(group_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list group posts", e)
            })?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Posts published by an author, newest first.
    pub async fn page_by_author(
        &self,
        author_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count author posts", e)
            })?;

        let query = format!(
            "{META_SELECT} WHERE p.author_id = $1 ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        );
        let posts = sqlx::query_as::<_, PostWithMeta>(&query)
            .bind(author_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list author posts", e)
            })?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// The follow feed: posts whose author is followed by `user_id`, newest first.
    pub async fn page_followed(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts p \
             JOIN follows f ON f.author_id = p.author_id \
             WHERE f.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count feed posts", e))?;

        let query = format!(
            "{META_SELECT} JOIN follows f ON f.author_id = p.author_id \
             WHERE f.user_id = $1 ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        );
        let posts = sqlx::query_as::<_, PostWithMeta>(&query)
            .bind(user_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list feed posts", e)
            })?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count posts published by an author.
    pub async fn count_by_author(&self, author_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count author posts", e)
            })?;
        Ok(count as u64)
    }

    /// Publish a new post.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (author_id, group_id, text, image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.author_id)
        .bind(data.group_id)
        .bind(&data.text)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Replace a post's body, group, and image. `created_at` never changes.
    pub async fn update(&self, data: &UpdatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET text = $2, group_id = $3, image_url = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.text)
        .bind(data.group_id)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post {} not found", data.id)))
    }

    /// Delete a post by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        Ok(result.rows_affected() > 0)
    }
}
