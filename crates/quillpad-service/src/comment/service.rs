//! Comment creation, listing, and deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use quillpad_core::error::AppError;
use quillpad_database::repositories::comment::CommentRepository;
use quillpad_database::repositories::post::PostRepository;
use quillpad_entity::comment::{CommentWithAuthor, CreateComment};

use crate::context::RequestContext;

/// Handles comments on posts.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// Post repository, for existence checks.
    post_repo: Arc<PostRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comment_repo: Arc<CommentRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    /// Adds a comment by the current user to a post.
    pub async fn add(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        text: &str,
    ) -> Result<CommentWithAuthor, AppError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        let comment = self
            .comment_repo
            .create(&CreateComment {
                post_id,
                author_id: ctx.user_id,
                text: text.to_string(),
            })
            .await?;

        info!(comment_id = %comment.id, post_id = %post_id, author = %ctx.username, "Comment added");

        self.comment_repo
            .find_with_author(comment.id)
            .await?
            .ok_or_else(|| AppError::internal("Created comment vanished"))
    }

    /// All comments on a post, oldest first.
    pub async fn list(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, AppError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        self.comment_repo.list_for_post(post_id).await
    }

    /// Deletes a comment. Only the comment's author may delete it.
    pub async fn delete(&self, ctx: &RequestContext, comment_id: Uuid) -> Result<(), AppError> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {comment_id} not found")))?;

        if comment.author_id != ctx.user_id {
            return Err(AppError::forbidden("Only the author can delete a comment"));
        }

        self.comment_repo.delete(comment_id).await?;
        info!(comment_id = %comment_id, author = %ctx.username, "Comment deleted");
        Ok(())
    }
}
