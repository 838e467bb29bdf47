//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The post this comment belongs to.
    pub post_id: Uuid,
    /// The commenting user.
    pub author_id: Uuid,
    /// Comment body.
    pub text: String,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    /// Author's username.
    pub author_username: String,
    /// Author's display name.
    pub author_display_name: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to add a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
}
