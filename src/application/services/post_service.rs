//! Post Service
//!
//! Handles post CRUD. A post is created and updated together with its group
//! in a single repository call, which the storage layer runs as one
//! transaction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewPost, PostChanges, PostDetails, PostRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// Page of posts, newest first
    async fn list_posts(&self, page: PageRequest) -> Result<Page<PostDetails>, PostError>;

    /// Get a post by ID
    async fn get_post(&self, post_id: i64) -> Result<PostDetails, PostError>;

    /// Create a post and its group; the author is always the caller
    async fn create_post(&self, author_id: i64, post: NewPost) -> Result<PostDetails, PostError>;

    /// Partially update a post and its group in place
    async fn update_post(
        &self,
        post_id: i64,
        changes: PostChanges,
    ) -> Result<PostDetails, PostError>;

    /// Delete a post
    async fn delete_post(&self, post_id: i64) -> Result<(), PostError>;
}

/// Post service errors
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound => AppError::NotFound("Not found.".into()),
            PostError::Repository(e) => e,
        }
    }
}

/// PostService implementation
pub struct PostServiceImpl {
    post_repo: Arc<dyn PostRepository>,
}

impl PostServiceImpl {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }
}

#[async_trait]
impl PostService for PostServiceImpl {
    async fn list_posts(&self, page: PageRequest) -> Result<Page<PostDetails>, PostError> {
        let count = self.post_repo.count().await?;
        let posts = self.post_repo.list(page.limit, page.offset).await?;

        Ok(Page::new(posts, count, page))
    }

    async fn get_post(&self, post_id: i64) -> Result<PostDetails, PostError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }

    async fn create_post(&self, author_id: i64, post: NewPost) -> Result<PostDetails, PostError> {
        let post_id = self.post_repo.create_with_group(author_id, &post).await?;
        tracing::info!(post_id, author_id, group_slug = %post.group.slug, "Post created");

        self.get_post(post_id).await
    }

    async fn update_post(
        &self,
        post_id: i64,
        changes: PostChanges,
    ) -> Result<PostDetails, PostError> {
        if !self.post_repo.update_with_group(post_id, &changes).await? {
            return Err(PostError::NotFound);
        }
        tracing::info!(post_id, group_changed = changes.group.is_some(), "Post updated");

        self.get_post(post_id).await
    }

    async fn delete_post(&self, post_id: i64) -> Result<(), PostError> {
        if !self.post_repo.delete(post_id).await? {
            return Err(PostError::NotFound);
        }
        tracing::info!(post_id, "Post deleted");
        Ok(())
    }
}
