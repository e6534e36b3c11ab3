//! Star Rating Service
//!
//! Sets the caller's rating for a post. Rating again overwrites the stored
//! value for the same (post, user) pair.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{PostRepository, Star, StarRepository, MAX_STARS};
use crate::shared::error::AppError;

/// Star service trait
#[async_trait]
pub trait StarService: Send + Sync {
    /// Insert or overwrite the caller's rating of a post
    async fn set_stars(&self, post_id: i64, user_id: i64, stars: i32) -> Result<Star, StarError>;
}

/// Star service errors
#[derive(Debug, thiserror::Error)]
pub enum StarError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Rating {0} exceeds the maximum")]
    TooManyStars(i32),

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<StarError> for AppError {
    fn from(err: StarError) -> Self {
        match err {
            StarError::PostNotFound => AppError::NotFound("Not found.".into()),
            StarError::TooManyStars(_) => AppError::field(
                "stars",
                format!("Maximum rating must not exceed {} stars", MAX_STARS),
            ),
            StarError::Repository(e) => e,
        }
    }
}

/// StarService implementation
pub struct StarServiceImpl {
    star_repo: Arc<dyn StarRepository>,
    post_repo: Arc<dyn PostRepository>,
}

impl StarServiceImpl {
    pub fn new(star_repo: Arc<dyn StarRepository>, post_repo: Arc<dyn PostRepository>) -> Self {
        Self {
            star_repo,
            post_repo,
        }
    }
}

#[async_trait]
impl StarService for StarServiceImpl {
    async fn set_stars(&self, post_id: i64, user_id: i64, stars: i32) -> Result<Star, StarError> {
        if !self.post_repo.exists(post_id).await? {
            return Err(StarError::PostNotFound);
        }

        // No lower bound: only ratings above the maximum are rejected.
        if stars > MAX_STARS {
            return Err(StarError::TooManyStars(stars));
        }

        let star = self.star_repo.upsert(post_id, user_id, stars).await?;
        tracing::info!(post_id, user_id, stars, "Star rating set");
        Ok(star)
    }
}
