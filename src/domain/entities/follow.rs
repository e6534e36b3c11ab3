//! Follow entity and repository trait.
//!
//! Maps to the `follows` table: a directed edge from `user` to `following`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a follow edge.
///
/// Maps to the `follows` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - user_id: BIGINT NOT NULL REFERENCES users(id)
/// - following_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Self-follows and duplicate edges are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub id: i64,
    pub user_id: i64,
    pub following_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Follow data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert an edge from `user_id` to `following_id`.
    async fn create(&self, user_id: i64, following_id: i64) -> Result<Follow, AppError>;
}
