//! Follow Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Follow, FollowRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct FollowRow {
    id: i64,
    user_id: i64,
    following_id: i64,
    created_at: DateTime<Utc>,
}

/// PostgreSQL follow repository implementation.
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    /// Duplicate and self follows are stored as-is; the table has no
    /// uniqueness constraint on the pair.
    async fn create(&self, user_id: i64, following_id: i64) -> Result<Follow, AppError> {
        let row = sqlx::query_as::<_, FollowRow>(
            r#"
            INSERT INTO follows (user_id, following_id)
            VALUES ($1, $2)
            RETURNING id, user_id, following_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(following_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Follow {
            id: row.id,
            user_id: row.user_id,
            following_id: row.following_id,
            created_at: row.created_at,
        })
    }
}
