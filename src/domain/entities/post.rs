//! Post entity, its read model and repository trait.
//!
//! Maps to the `posts` table. A post always belongs to exactly one group and
//! is written together with it: creating a post inserts its group, updating a
//! post may rewrite the group's fields in place. Both happen in one transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::group::{Group, GroupChanges, NewGroup};
use crate::shared::error::AppError;

/// Represents a post row.
///
/// Maps to the `posts` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - text: TEXT NOT NULL
/// - topic: VARCHAR(200) NOT NULL
/// - published_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - author_id: BIGINT NOT NULL REFERENCES users(id)
/// - group_id: BIGINT NOT NULL REFERENCES groups(id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub topic: String,
    pub published_at: DateTime<Utc>,
    pub author_id: i64,
    pub group_id: i64,
}

/// A post with its relations loaded, as returned by reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetails {
    pub post: Post,

    /// Username of the author
    pub author_name: String,

    pub group: Group,

    pub comments: Vec<Comment>,

    /// Mean of all star ratings, 0 when the post has none
    pub stars: f64,
}

/// Values needed to insert a post together with its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub text: String,
    pub topic: String,
    pub group: NewGroup,
}

/// Partial post update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub text: Option<String>,
    pub topic: Option<String>,
    pub group: Option<GroupChanges>,
}

/// Repository trait for Post data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Page of posts, newest first, with group, author, comments and stars loaded.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<PostDetails>, AppError>;

    /// Total number of posts.
    async fn count(&self) -> Result<i64, AppError>;

    /// Find a post by ID with its relations loaded.
    async fn find_by_id(&self, id: i64) -> Result<Option<PostDetails>, AppError>;

    /// Check whether a post exists.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a new group and a post referencing it atomically.
    ///
    /// Returns the new post ID. On failure neither row is written.
    async fn create_with_group(&self, author_id: i64, post: &NewPost) -> Result<i64, AppError>;

    /// Update a post and, when present, its existing group atomically.
    ///
    /// The post keeps its group ID; the group row is mutated in place.
    /// Returns `false` when the post does not exist.
    async fn update_with_group(&self, id: i64, changes: &PostChanges) -> Result<bool, AppError>;

    /// Delete a post. Returns `false` when the post does not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
