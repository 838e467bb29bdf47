//! Group repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use quillpad_core::error::{AppError, ErrorKind};
use quillpad_core::result::AppResult;
use quillpad_core::types::pagination::{PageRequest, PageResponse};
use quillpad_entity::group::{CreateGroup, Group};

/// Repository for group CRUD and query operations.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Group>> {
        sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by id", e)
            })
    }

    /// Find a group by its unique slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Group>> {
        sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by slug", e)
            })
    }

    /// List all groups with pagination, alphabetically by title.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Group>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM groups")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count groups", e))?;

        let groups = sqlx::query_as::<_, Group>(
            "SELECT * FROM groups ORDER BY title ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list groups", e))?;

        Ok(PageResponse::new(
            groups,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new group.
    pub async fn create(&self, data: &CreateGroup) -> AppResult<Group> {
        sqlx::query_as::<_, Group>(
            "INSERT INTO groups (title, slug, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("groups_slug_key") => {
                AppError::conflict(format!("Group slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create group", e),
        })
    }
}
