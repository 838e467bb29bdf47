//! Group directory and group feed queries.
//!
//! Groups are operator-curated: creation happens through the CLI, so the
//! service surface here is read-only.

use std::sync::Arc;

use quillpad_core::error::AppError;
use quillpad_core::types::pagination::{PageRequest, PageResponse};
use quillpad_database::repositories::group::GroupRepository;
use quillpad_database::repositories::post::PostRepository;
use quillpad_entity::group::Group;
use quillpad_entity::post::PostWithMeta;

/// Handles group lookups and group feeds.
#[derive(Debug, Clone)]
pub struct GroupService {
    /// Group repository.
    group_repo: Arc<GroupRepository>,
    /// Post repository, for group feeds.
    post_repo: Arc<PostRepository>,
}

impl GroupService {
    /// Creates a new group service.
    pub fn new(group_repo: Arc<GroupRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            group_repo,
            post_repo,
        }
    }

    /// The group directory, paginated.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<Group>, AppError> {
        self.group_repo.find_all(page).await
    }

    /// A single group by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Group, AppError> {
        self.group_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Group '{slug}' not found")))
    }

    /// Posts published into a group, newest first.
    pub async fn posts(
        &self,
        slug: &str,
        page: &PageRequest,
    ) -> Result<(Group, PageResponse<PostWithMeta>), AppError> {
        let group = self.get_by_slug(slug).await?;
        let posts = self.post_repo.page_by_group(group.id, page).await?;
        Ok((group, posts))
    }
}
