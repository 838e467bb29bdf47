//! Request DTOs with declarative validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 150))]
    pub username: String,
    /// Email address (optional).
    #[validate(email)]
    pub email: Option<String>,
    /// Plaintext password; policy-checked in the service layer.
    pub password: String,
    /// Display name (optional).
    #[validate(length(max = 150))]
    pub display_name: Option<String>,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// POST /api/auth/refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token previously issued.
    pub refresh_token: String,
}

/// POST /api/posts and PUT /api/posts/{id}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostRequest {
    /// Post body.
    #[validate(length(min = 1, max = 10000))]
    pub text: String,
    /// Group to publish into (optional).
    pub group_id: Option<Uuid>,
    /// Attached image reference (optional).
    #[validate(url)]
    pub image_url: Option<String>,
}

/// POST /api/posts/{id}/comments
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    /// Comment body.
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// PUT /api/users/me/password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub current_password: String,
    /// The new password; policy-checked in the service layer.
    pub new_password: String,
}

/// PUT /api/users/me
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name (optional).
    #[validate(length(min = 1, max = 150))]
    pub display_name: Option<String>,
    /// New email (optional).
    #[validate(email)]
    pub email: Option<String>,
    /// New bio (optional).
    #[validate(length(max = 500))]
    pub bio: Option<String>,
}
