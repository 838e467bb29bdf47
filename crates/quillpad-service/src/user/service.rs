//! User registration, profile viewing, and profile editing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use quillpad_auth::password::{PasswordHasher, PasswordValidator};
use quillpad_core::error::AppError;
use quillpad_database::repositories::follow::FollowRepository;
use quillpad_database::repositories::post::PostRepository;
use quillpad_database::repositories::user::UserRepository;
use quillpad_entity::user::{CreateUser, UpdateProfile, User};

use crate::context::RequestContext;

/// Allowed length range for usernames.
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 150;

/// A user profile as shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    /// The profiled user.
    pub user: User,
    /// Number of posts they have published.
    pub post_count: u64,
    /// Number of users following them.
    pub follower_count: u64,
    /// Number of authors they follow.
    pub following_count: u64,
    /// Whether the requesting viewer follows them (false for anonymous viewers).
    pub following: bool,
}

/// Handles account registration and profile operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Post repository, for profile post counts.
    post_repo: Arc<PostRepository>,
    /// Follow repository, for profile follow stats.
    follow_repo: Arc<FollowRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

/// Data for updating a user's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name (optional).
    pub display_name: Option<String>,
    /// New email (optional).
    pub email: Option<String>,
    /// New bio (optional).
    pub bio: Option<String>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        post_repo: Arc<PostRepository>,
        follow_repo: Arc<FollowRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            follow_repo,
            hasher,
            validator,
        }
    }

    /// Registers a new account.
    pub async fn register(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<User, AppError> {
        validate_username(username)?;

        if let Some(email) = email {
            if !email.contains('@') || !email.contains('.') {
                return Err(AppError::validation("Invalid email format"));
            }
        }

        self.validator.validate(password)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.map(String::from),
                password_hash,
                display_name: display_name.map(String::from),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "Account registered");
        Ok(user)
    }

    /// Gets the current user's full record.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Assembles the profile page for a username.
    ///
    /// `viewer` is the authenticated user requesting the profile, if any;
    /// it drives the `following` flag.
    pub async fn profile(
        &self,
        username: &str,
        viewer: Option<Uuid>,
    ) -> Result<ProfileView, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        let post_count = self.post_repo.count_by_author(user.id).await?;
        let follower_count = self.follow_repo.follower_count(user.id).await?;
        let following_count = self.follow_repo.following_count(user.id).await?;

        let following = match viewer {
            Some(viewer_id) if viewer_id != user.id => {
                self.follow_repo.exists(viewer_id, user.id).await?
            }
            _ => false,
        };

        Ok(ProfileView {
            user,
            post_count,
            follower_count,
            following_count,
            following,
        })
    }

    /// Changes the current user's password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.me(ctx).await?;

        let valid = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }

        if current_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }

        self.validator.validate(new_password)?;
        let new_hash = self.hasher.hash_password(new_password)?;

        self.user_repo.update_password(ctx.user_id, &new_hash).await?;

        info!(user_id = %ctx.user_id, "Password changed");
        Ok(())
    }

    /// Updates the current user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        if let Some(ref display_name) = req.display_name {
            if display_name.trim().is_empty() {
                return Err(AppError::validation("Display name cannot be empty"));
            }
        }

        if let Some(ref email) = req.email {
            if !email.contains('@') || !email.contains('.') {
                return Err(AppError::validation("Invalid email format"));
            }

            // Uniqueness check ahead of the DB constraint for a clearer error.
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != ctx.user_id {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        let user = self
            .user_repo
            .update_profile(&UpdateProfile {
                id: ctx.user_id,
                email: req.email,
                display_name: req.display_name,
                bio: req.bio,
            })
            .await?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}

/// Usernames are 3–150 characters of letters, digits, `_`, `.`, or `-`.
fn validate_username(username: &str) -> Result<(), AppError> {
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(AppError::validation(format!(
            "Username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
        )));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(AppError::validation(
            "Username may only contain letters, digits, '_', '.', and '-'",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("leo").is_ok());
        assert!(validate_username("leo.tolstoy_1828").is_ok());
        assert!(validate_username("has-no-name").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("with space").is_err());
        assert!(validate_username("semi;colon").is_err());
        assert!(validate_username(&"x".repeat(151)).is_err());
    }
}
