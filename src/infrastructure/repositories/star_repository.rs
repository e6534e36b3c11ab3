//! Star Repository Implementation
//!
//! Ratings are unique per (post, user); writes go through a single
//! `INSERT ... ON CONFLICT` so concurrent ratings by the same user never
//! produce two rows.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Star, StarRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct StarRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    stars: i32,
}

/// PostgreSQL star repository implementation.
#[derive(Clone)]
pub struct PgStarRepository {
    pool: PgPool,
}

impl PgStarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StarRepository for PgStarRepository {
    async fn upsert(&self, post_id: i64, user_id: i64, stars: i32) -> Result<Star, AppError> {
        let row = sqlx::query_as::<_, StarRow>(
            r#"
            INSERT INTO stars (post_id, user_id, stars)
            VALUES ($1, $2, $3)
            ON CONFLICT (post_id, user_id) DO UPDATE SET stars = EXCLUDED.stars
            RETURNING id, post_id, user_id, stars
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(stars)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // The post was deleted between the existence check and the insert.
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound("Not found.".into())
            }
            _ => AppError::Database(e),
        })?;

        Ok(Star {
            id: row.id,
            post_id: row.post_id,
            user_id: row.user_id,
            stars: row.stars,
        })
    }
}
