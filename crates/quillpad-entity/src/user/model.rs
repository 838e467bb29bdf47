//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered author on the Quillpad platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Short free-form profile text.
    pub bio: Option<String>,
    /// Number of consecutive failed login attempts.
    pub failed_login_attempts: i32,
    /// Account locked until this time (if locked).
    pub locked_until: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the user account is currently locked out.
    pub fn is_locked(&self) -> bool {
        if let Some(locked_until) = self.locked_until {
            return Utc::now() < locked_until;
        }
        false
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name (optional).
    pub display_name: Option<String>,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// The user ID to update.
    pub id: Uuid,
    /// New email address.
    pub email: Option<String>,
    /// New display name.
    pub display_name: Option<String>,
    /// New profile bio.
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(locked_until: Option<DateTime<Utc>>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "author".to_string(),
            email: None,
            password_hash: "x".to_string(),
            display_name: None,
            bio: None,
            failed_login_attempts: 0,
            locked_until,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_lockout_in_future_locks() {
        let user = make_user(Some(Utc::now() + chrono::Duration::minutes(5)));
        assert!(user.is_locked());
    }

    #[test]
    fn test_expired_lockout_unlocks() {
        let user = make_user(Some(Utc::now() - chrono::Duration::minutes(5)));
        assert!(!user.is_locked());
    }
}
