//! Follow Service
//!
//! Creates follow edges from the caller to another user addressed by username.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{FollowRepository, UserRepository};
use crate::shared::error::AppError;

/// Follow service trait
#[async_trait]
pub trait FollowService: Send + Sync {
    /// Make `user_id` follow the user named `following`
    async fn follow(&self, user_id: i64, following: &str) -> Result<FollowEdge, FollowError>;
}

/// A created follow edge, with both ends as usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    pub user: String,
    pub following: String,
}

/// Follow service errors
#[derive(Debug, thiserror::Error)]
pub enum FollowError {
    #[error("User {0} does not exist")]
    TargetNotFound(String),

    #[error("Authenticated user no longer exists")]
    FollowerNotFound,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<FollowError> for AppError {
    fn from(err: FollowError) -> Self {
        match err {
            FollowError::TargetNotFound(username) => AppError::field(
                "following",
                format!("Object with username={} does not exist.", username),
            ),
            FollowError::FollowerNotFound => AppError::Unauthorized("User not found".into()),
            FollowError::Repository(e) => e,
        }
    }
}

/// FollowService implementation
pub struct FollowServiceImpl {
    follow_repo: Arc<dyn FollowRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl FollowServiceImpl {
    pub fn new(follow_repo: Arc<dyn FollowRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            follow_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl FollowService for FollowServiceImpl {
    async fn follow(&self, user_id: i64, following: &str) -> Result<FollowEdge, FollowError> {
        let target = self
            .user_repo
            .find_by_username(following)
            .await?
            .ok_or_else(|| FollowError::TargetNotFound(following.to_string()))?;

        let follower = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(FollowError::FollowerNotFound)?;

        let edge = self.follow_repo.create(follower.id, target.id).await?;
        tracing::info!(
            follow_id = edge.id,
            user = %follower.username,
            following = %target.username,
            "Follow created"
        );

        Ok(FollowEdge {
            user: follower.username,
            following: target.username,
        })
    }
}
