//! Follow and unfollow, guarded and idempotent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use quillpad_core::error::AppError;
use quillpad_database::repositories::follow::FollowRepository;
use quillpad_database::repositories::user::UserRepository;
use quillpad_entity::user::User;

use crate::context::RequestContext;

/// Outcome of a follow or unfollow call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowState {
    /// Whether the viewer now follows the author.
    pub following: bool,
    /// Whether this call changed anything (false for idempotent repeats).
    pub changed: bool,
}

/// Handles subscription edges between users.
#[derive(Debug, Clone)]
pub struct FollowService {
    /// Follow repository.
    follow_repo: Arc<FollowRepository>,
    /// User repository, for resolving usernames.
    user_repo: Arc<UserRepository>,
}

impl FollowService {
    /// Creates a new follow service.
    pub fn new(follow_repo: Arc<FollowRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            follow_repo,
            user_repo,
        }
    }

    /// Follow an author. Idempotent: following an already-followed author
    /// reports `changed: false`. Self-follows are rejected.
    pub async fn follow(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> Result<FollowState, AppError> {
        let author = self.resolve(username).await?;

        if author.id == ctx.user_id {
            return Err(AppError::validation("You cannot follow yourself"));
        }

        let created = self.follow_repo.create(ctx.user_id, author.id).await?;
        if created {
            info!(follower = %ctx.username, author = %author.username, "Followed author");
        }

        Ok(FollowState {
            following: true,
            changed: created,
        })
    }

    /// Unfollow an author. Idempotent: unfollowing an author who was never
    /// followed reports `changed: false`.
    pub async fn unfollow(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> Result<FollowState, AppError> {
        let author = self.resolve(username).await?;

        let removed = self.follow_repo.delete(ctx.user_id, author.id).await?;
        if removed {
            info!(follower = %ctx.username, author = %author.username, "Unfollowed author");
        }

        Ok(FollowState {
            following: false,
            changed: removed,
        })
    }

    async fn resolve(&self, username: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))
    }
}
