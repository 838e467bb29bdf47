//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Number of leading characters used for the short display form of a post.
pub const PREVIEW_LEN: usize = 15;

/// A published post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// The author who published the post.
    pub author_id: Uuid,
    /// Group the post was published into (optional).
    pub group_id: Option<Uuid>,
    /// Post body.
    pub text: String,
    /// Reference to an attached image (optional).
    pub image_url: Option<String>,
    /// When the post was published. Feed ordering is by this field.
    pub created_at: DateTime<Utc>,
    /// When the post was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Short display form: the first [`PREVIEW_LEN`] characters of the body.
    pub fn preview(&self) -> String {
        self.text.chars().take(PREVIEW_LEN).collect()
    }
}

/// A post joined with its author, group, and comment count — the shape every
/// feed and detail endpoint works with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostWithMeta {
    /// Unique post identifier.
    pub id: Uuid,
    /// The author who published the post.
    pub author_id: Uuid,
    /// Author's username.
    pub author_username: String,
    /// Author's display name.
    pub author_display_name: Option<String>,
    /// Group the post was published into (optional).
    pub group_id: Option<Uuid>,
    /// Group title, when the post belongs to a group.
    pub group_title: Option<String>,
    /// Group slug, when the post belongs to a group.
    pub group_slug: Option<String>,
    /// Post body.
    pub text: String,
    /// Reference to an attached image (optional).
    pub image_url: Option<String>,
    /// Number of comments on the post.
    pub comment_count: i64,
    /// When the post was published.
    pub created_at: DateTime<Utc>,
    /// When the post was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Data required to publish a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// The publishing author.
    pub author_id: Uuid,
    /// Target group (optional).
    pub group_id: Option<Uuid>,
    /// Post body.
    pub text: String,
    /// Attached image reference (optional).
    pub image_url: Option<String>,
}

/// Data for editing an existing post. Replaces the body, group, and image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    /// The post to edit.
    pub id: Uuid,
    /// New post body.
    pub text: String,
    /// New group assignment (`None` clears the group).
    pub group_id: Option<Uuid>,
    /// New image reference (`None` clears the image).
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(text: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            group_id: None,
            text: text.to_string(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let post = make_post("a post body that is much longer than the preview");
        assert_eq!(post.preview(), "a post body tha");
        assert_eq!(post.preview().chars().count(), PREVIEW_LEN);
    }

    #[test]
    fn test_preview_keeps_short_text() {
        let post = make_post("short");
        assert_eq!(post.preview(), "short");
    }

    #[test]
    fn test_preview_is_char_safe() {
        let post = make_post("Тестовый пост про жизнь");
        assert_eq!(post.preview(), "Тестовый пост п");
    }
}
