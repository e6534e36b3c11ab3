//! Post Repository Implementation
//!
//! PostgreSQL implementation of the PostRepository trait. A post and its
//! group are always written in one transaction. Reads load the author name,
//! group and average rating in one query and batch the comments of a whole
//! page into a second.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::comment_repository::comments_for_posts;
use crate::domain::{Group, NewPost, Post, PostChanges, PostDetails, PostRepository};
use crate::infrastructure::database::{unique_violation_as_field, with_transaction};
use crate::shared::error::AppError;

const SLUG_TAKEN: &str = "group with this slug already exists.";

const SELECT_POST_DETAILS: &str = r#"
    SELECT p.id, p.text, p.topic, p.published_at, p.author_id, p.group_id,
           u.username AS author_name,
           g.title AS group_title, g.slug AS group_slug, g.description AS group_description,
           COALESCE((SELECT AVG(s.stars) FROM stars s WHERE s.post_id = p.id)::float8, 0) AS stars
    FROM posts p
    JOIN users u ON u.id = p.author_id
    JOIN groups g ON g.id = p.group_id
"#;

/// Post row joined with its author, group and rating.
#[derive(Debug, sqlx::FromRow)]
struct PostDetailsRow {
    id: i64,
    text: String,
    topic: String,
    published_at: DateTime<Utc>,
    author_id: i64,
    group_id: i64,
    author_name: String,
    group_title: String,
    group_slug: String,
    group_description: String,
    stars: f64,
}

impl PostDetailsRow {
    fn into_details(self) -> PostDetails {
        PostDetails {
            post: Post {
                id: self.id,
                text: self.text,
                topic: self.topic,
                published_at: self.published_at,
                author_id: self.author_id,
                group_id: self.group_id,
            },
            author_name: self.author_name,
            group: Group {
                id: self.group_id,
                title: self.group_title,
                slug: self.group_slug,
                description: self.group_description,
            },
            comments: Vec::new(),
            stars: self.stars,
        }
    }
}

/// PostgreSQL post repository implementation.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach comments to already loaded posts.
    async fn with_comments(&self, rows: Vec<PostDetailsRow>) -> Result<Vec<PostDetails>, AppError> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut comments = comments_for_posts(&self.pool, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut details = row.into_details();
                details.comments = comments.remove(&details.post.id).unwrap_or_default();
                details
            })
            .collect())
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<PostDetails>, AppError> {
        let sql = format!(
            "{} ORDER BY p.published_at DESC, p.id DESC LIMIT $1 OFFSET $2",
            SELECT_POST_DETAILS
        );
        let rows = sqlx::query_as::<_, PostDetailsRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        self.with_comments(rows).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostDetails>, AppError> {
        let sql = format!("{} WHERE p.id = $1", SELECT_POST_DETAILS);
        let row = sqlx::query_as::<_, PostDetailsRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.with_comments(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create_with_group(&self, author_id: i64, post: &NewPost) -> Result<i64, AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            let group_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO groups (title, slug, description)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(&post.group.title)
            .bind(&post.group.slug)
            .bind(&post.group.description)
            .fetch_one(tx.conn())
            .await
            .map_err(|e| unique_violation_as_field(e, "group.slug", SLUG_TAKEN))?;

            let post_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO posts (text, topic, author_id, group_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(&post.text)
            .bind(&post.topic)
            .bind(author_id)
            .bind(group_id)
            .fetch_one(tx.conn())
            .await?;

            Ok((post_id, tx))
        })
        .await
    }

    async fn update_with_group(&self, id: i64, changes: &PostChanges) -> Result<bool, AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            let group_id: Option<i64> = sqlx::query_scalar(
                r#"
                UPDATE posts
                SET text = COALESCE($2, text),
                    topic = COALESCE($3, topic)
                WHERE id = $1
                RETURNING group_id
                "#,
            )
            .bind(id)
            .bind(&changes.text)
            .bind(&changes.topic)
            .fetch_optional(tx.conn())
            .await?;

            let Some(group_id) = group_id else {
                return Ok((false, tx));
            };

            if let Some(group) = &changes.group {
                sqlx::query(
                    r#"
                    UPDATE groups
                    SET title = COALESCE($2, title),
                        slug = COALESCE($3, slug),
                        description = COALESCE($4, description)
                    WHERE id = $1
                    "#,
                )
                .bind(group_id)
                .bind(&group.title)
                .bind(&group.slug)
                .bind(&group.description)
                .execute(tx.conn())
                .await
                .map_err(|e| unique_violation_as_field(e, "group.slug", SLUG_TAKEN))?;
            }

            Ok((true, tx))
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
