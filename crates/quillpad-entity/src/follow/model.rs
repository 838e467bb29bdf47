//! Follow entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A directed subscription edge: `user_id` follows `author_id`.
///
/// The pair is unique and self-follows are rejected both in the service
/// layer and by a database CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Follow {
    /// The follower.
    pub user_id: Uuid,
    /// The followed author.
    pub author_id: Uuid,
    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
}
