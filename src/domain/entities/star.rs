//! Star rating entity and repository trait.
//!
//! Maps to the `stars` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Highest rating a user may give a post.
pub const MAX_STARS: i32 = 5;

/// Represents a user's rating of a post.
///
/// Maps to the `stars` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - post_id: BIGINT NOT NULL REFERENCES posts(id)
/// - user_id: BIGINT NOT NULL REFERENCES users(id)
/// - stars: INTEGER NOT NULL
///
/// UNIQUE (post_id, user_id): re-rating overwrites the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub stars: i32,
}

/// Repository trait for Star data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StarRepository: Send + Sync {
    /// Insert or overwrite the rating keyed by (post, user).
    async fn upsert(&self, post_id: i64, user_id: i64, stars: i32) -> Result<Star, AppError>;
}
