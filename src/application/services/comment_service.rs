//! Comment Service
//!
//! Handles comment listing, creation and deletion. Comments cannot be edited.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Comment, CommentRepository, NewComment, PostRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Comment service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Page of comments ordered by ID
    async fn list_comments(&self, page: PageRequest) -> Result<Page<Comment>, CommentError>;

    /// Create a comment on a post; the author is always the caller
    async fn create_comment(
        &self,
        author_id: i64,
        post_id: i64,
        text: String,
    ) -> Result<Comment, CommentError>;

    /// Delete a comment
    async fn delete_comment(&self, comment_id: i64) -> Result<(), CommentError>;
}

/// Comment service errors
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Post {0} does not exist")]
    PostNotFound(i64),

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<CommentError> for AppError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::NotFound => AppError::NotFound("Not found.".into()),
            CommentError::PostNotFound(id) => AppError::field(
                "post",
                format!("Invalid pk \"{}\" - object does not exist.", id),
            ),
            CommentError::Repository(e) => e,
        }
    }
}

/// CommentService implementation
pub struct CommentServiceImpl {
    comment_repo: Arc<dyn CommentRepository>,
    post_repo: Arc<dyn PostRepository>,
}

impl CommentServiceImpl {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn list_comments(&self, page: PageRequest) -> Result<Page<Comment>, CommentError> {
        let count = self.comment_repo.count().await?;
        let comments = self.comment_repo.list(page.limit, page.offset).await?;

        Ok(Page::new(comments, count, page))
    }

    async fn create_comment(
        &self,
        author_id: i64,
        post_id: i64,
        text: String,
    ) -> Result<Comment, CommentError> {
        if !self.post_repo.exists(post_id).await? {
            return Err(CommentError::PostNotFound(post_id));
        }

        let comment = self
            .comment_repo
            .create(&NewComment {
                post_id,
                author_id,
                text,
            })
            .await?;

        tracing::info!(comment_id = comment.id, post_id, author_id, "Comment created");
        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<(), CommentError> {
        if !self.comment_repo.delete(comment_id).await? {
            return Err(CommentError::NotFound);
        }
        tracing::info!(comment_id, "Comment deleted");
        Ok(())
    }
}
