//! Group entity and repository trait.
//!
//! Maps to the `groups` table. A group is the topic/category a post is
//! filed under; it is written together with its post (see `PostRepository`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a group.
///
/// Maps to the `groups` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(200) NOT NULL
/// - slug: VARCHAR(50) NOT NULL UNIQUE
/// - description: TEXT NOT NULL DEFAULT ''
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Group fields written when a post is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGroup {
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Partial group update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl GroupChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.description.is_none()
    }
}

/// Repository trait for Group data access operations.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// All groups ordered by ID.
    async fn list(&self) -> Result<Vec<Group>, AppError>;
}
