//! Comment entity and repository trait.
//!
//! Maps to the `comments` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a comment on a post.
///
/// Maps to the `comments` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - post_id: BIGINT NOT NULL REFERENCES posts(id)
/// - author_id: BIGINT NOT NULL REFERENCES users(id)
/// - text: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `author_username` is joined from `users` on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Values needed to insert a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub author_id: i64,
    pub text: String,
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Page of comments ordered by ID.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Comment>, AppError>;

    /// Total number of comments.
    async fn count(&self) -> Result<i64, AppError>;

    /// Create a new comment.
    async fn create(&self, comment: &NewComment) -> Result<Comment, AppError>;

    /// Delete a comment. Returns `false` when the comment does not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
