//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quillpad_entity::comment::CommentWithAuthor;
use quillpad_entity::group::Group;
use quillpad_entity::post::PostWithMeta;
use quillpad_entity::user::User;
use quillpad_service::user::ProfileView;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Profile bio.
    pub bio: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Refresh response: a fresh token pair without user info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Compact author reference embedded in posts and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author's user ID.
    pub id: Uuid,
    /// Author's username.
    pub username: String,
    /// Author's display name.
    pub display_name: Option<String>,
}

/// Compact group reference embedded in posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRef {
    /// Group ID.
    pub id: Uuid,
    /// Group title.
    pub title: String,
    /// Group slug.
    pub slug: String,
}

/// A post as rendered in feeds and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: Uuid,
    /// Post body.
    pub text: String,
    /// The author.
    pub author: AuthorRef,
    /// The group, if any.
    pub group: Option<GroupRef>,
    /// Attached image reference.
    pub image_url: Option<String>,
    /// Number of comments.
    pub comment_count: i64,
    /// Published at.
    pub created_at: DateTime<Utc>,
    /// Last edited at.
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithMeta> for PostResponse {
    fn from(post: PostWithMeta) -> Self {
        let group = match (post.group_id, post.group_title, post.group_slug) {
            (Some(id), Some(title), Some(slug)) => Some(GroupRef { id, title, slug }),
            _ => None,
        };

        Self {
            id: post.id,
            text: post.text,
            author: AuthorRef {
                id: post.author_id,
                username: post.author_username,
                display_name: post.author_display_name,
            },
            group,
            image_url: post.image_url,
            comment_count: post.comment_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A comment as rendered beneath a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: Uuid,
    /// The post this comment belongs to.
    pub post_id: Uuid,
    /// The comment author.
    pub author: AuthorRef,
    /// Comment body.
    pub text: String,
    /// Posted at.
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(comment: CommentWithAuthor) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author: AuthorRef {
                id: comment.author_id,
                username: comment.author_username,
                display_name: comment.author_display_name,
            },
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}

/// A post detail page: the post, its author's post count, and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    /// The post.
    pub post: PostResponse,
    /// Total posts by the author.
    pub author_post_count: u64,
    /// Comments, oldest first.
    pub comments: Vec<CommentResponse>,
}

/// A group as rendered in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    /// Group ID.
    pub id: Uuid,
    /// Group title.
    pub title: String,
    /// Group slug.
    pub slug: String,
    /// Group description.
    pub description: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            slug: group.slug,
            description: group.description,
            created_at: group.created_at,
        }
    }
}

/// A profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The profiled user.
    pub user: UserResponse,
    /// Number of posts they published.
    pub post_count: u64,
    /// Number of followers.
    pub follower_count: u64,
    /// Number of authors they follow.
    pub following_count: u64,
    /// Whether the viewer follows them.
    pub following: bool,
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        Self {
            user: view.user.into(),
            post_count: view.post_count,
            follower_count: view.follower_count,
            following_count: view.following_count,
            following: view.following,
        }
    }
}

/// Follow/unfollow outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowStateResponse {
    /// Whether the viewer now follows the author.
    pub following: bool,
    /// Whether this call changed anything.
    pub changed: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database status.
    pub database: String,
    /// Cache status.
    pub cache: String,
}
