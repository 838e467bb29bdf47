//! Group entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named category that posts can be published into.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    /// Unique group identifier.
    pub id: Uuid,
    /// Human-readable title.
    pub title: String,
    /// URL-safe unique slug.
    pub slug: String,
    /// Longer description shown on the group page.
    pub description: String,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    pub title: String,
    pub slug: String,
    pub description: String,
}
