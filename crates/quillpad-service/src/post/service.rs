//! Post publishing, editing, and the cached index feed.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use quillpad_cache::keys;
use quillpad_cache::provider::CacheManager;
use quillpad_core::config::content::ContentConfig;
use quillpad_core::error::AppError;
use quillpad_core::traits::CacheProvider;
use quillpad_core::types::pagination::{PageRequest, PageResponse};
use quillpad_database::repositories::group::GroupRepository;
use quillpad_database::repositories::post::PostRepository;
use quillpad_database::repositories::user::UserRepository;
use quillpad_entity::post::{CreatePost, PostWithMeta, UpdatePost};

use crate::context::RequestContext;

/// A post detail page: the post plus how many posts its author has published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    /// The post with author/group metadata.
    pub post: PostWithMeta,
    /// Total posts by this post's author.
    pub author_post_count: u64,
}

/// Handles post publishing, editing, deletion, and feeds.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Group repository, for validating group assignment.
    group_repo: Arc<GroupRepository>,
    /// User repository, for resolving author feeds.
    user_repo: Arc<UserRepository>,
    /// Cache manager for the index feed.
    cache: Arc<CacheManager>,
    /// Content configuration.
    content: ContentConfig,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        post_repo: Arc<PostRepository>,
        group_repo: Arc<GroupRepository>,
        user_repo: Arc<UserRepository>,
        cache: Arc<CacheManager>,
        content: ContentConfig,
    ) -> Self {
        Self {
            post_repo,
            group_repo,
            user_repo,
            cache,
            content,
        }
    }

    /// The global index feed, read through a short-lived cache.
    ///
    /// The cache is keyed by (page, page size) and expires by TTL only; a
    /// freshly published post may take up to the TTL to appear, which is the
    /// documented behavior of the index page.
    pub async fn index(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        let key = keys::index_feed(page.page, page.page_size);

        if let Some(cached) = self
            .cache
            .get_json::<PageResponse<PostWithMeta>>(&key)
            .await?
        {
            debug!(page = page.page, "Index feed served from cache");
            return Ok(cached);
        }

        let result = self.post_repo.page_all(page).await?;

        self.cache
            .set_json(
                &key,
                &result,
                Duration::from_secs(self.content.index_cache_ttl_seconds),
            )
            .await?;

        Ok(result)
    }

    /// A post detail page.
    pub async fn get(&self, post_id: Uuid) -> Result<PostDetail, AppError> {
        let post = self
            .post_repo
            .find_with_meta(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        let author_post_count = self.post_repo.count_by_author(post.author_id).await?;

        Ok(PostDetail {
            post,
            author_post_count,
        })
    }

    /// Publishes a new post by the current user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        text: &str,
        group_id: Option<Uuid>,
        image_url: Option<String>,
    ) -> Result<PostWithMeta, AppError> {
        self.check_group(group_id).await?;

        let post = self
            .post_repo
            .create(&CreatePost {
                author_id: ctx.user_id,
                group_id,
                text: text.to_string(),
                image_url,
            })
            .await?;

        info!(post_id = %post.id, author = %ctx.username, preview = %post.preview(), "Post published");

        self.post_repo
            .find_with_meta(post.id)
            .await?
            .ok_or_else(|| AppError::internal("Created post vanished"))
    }

    /// Edits a post. Only the author may edit.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image_url: Option<String>,
    ) -> Result<PostWithMeta, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        if post.author_id != ctx.user_id {
            return Err(AppError::forbidden("Only the author can edit a post"));
        }

        self.check_group(group_id).await?;

        self.post_repo
            .update(&UpdatePost {
                id: post_id,
                text: text.to_string(),
                group_id,
                image_url,
            })
            .await?;

        info!(post_id = %post_id, author = %ctx.username, "Post edited");

        self.post_repo
            .find_with_meta(post_id)
            .await?
            .ok_or_else(|| AppError::internal("Updated post vanished"))
    }

    /// Deletes a post. Only the author may delete.
    pub async fn delete(&self, ctx: &RequestContext, post_id: Uuid) -> Result<(), AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        if post.author_id != ctx.user_id {
            return Err(AppError::forbidden("Only the author can delete a post"));
        }

        self.post_repo.delete(post_id).await?;
        info!(post_id = %post_id, author = %ctx.username, "Post deleted");
        Ok(())
    }

    /// Posts by a given author, newest first.
    pub async fn by_author(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        let author = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        self.post_repo.page_by_author(author.id, page).await
    }

    /// The follow feed: posts by authors the current user follows.
    pub async fn feed(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        self.post_repo.page_followed(ctx.user_id, page).await
    }

    /// A post may only be assigned to a group that exists.
    async fn check_group(&self, group_id: Option<Uuid>) -> Result<(), AppError> {
        if let Some(group_id) = group_id {
            self.group_repo
                .find_by_id(group_id)
                .await?
                .ok_or_else(|| AppError::validation(format!("Group {group_id} does not exist")))?;
        }
        Ok(())
    }
}
