//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A login session backing a JWT token pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (the `sid` claim).
    pub id: Uuid,
    /// Owner of the session.
    pub user_id: Uuid,
    /// JTI of the currently valid refresh token; rotated on refresh.
    pub refresh_jti: Uuid,
    /// IP address the session was created from.
    pub ip_address: String,
    /// User-Agent header at login time.
    pub user_agent: Option<String>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Last time a token from this session was used.
    pub last_seen_at: DateTime<Utc>,
    /// Absolute expiry time.
    pub expires_at: DateTime<Utc>,
    /// Set when the session is revoked (logout).
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// A session is active when it is neither revoked nor expired.
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && Utc::now() < self.expires_at
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// Owner of the session.
    pub user_id: Uuid,
    /// Initial refresh token JTI.
    pub refresh_jti: Uuid,
    /// Origin IP address.
    pub ip_address: String,
    /// User-Agent header (optional).
    pub user_agent: Option<String>,
    /// Absolute expiry time.
    pub expires_at: DateTime<Utc>,
}
