//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClosedPost, PostMatch, ThreadPost};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::utils::like_pattern;

/// PostgreSQL repository for post queries.
///
/// All request values are bound as statement parameters.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_closed_within(
        &self,
        max_minutes: i32,
        limit: i64,
    ) -> Result<Vec<ClosedPost>, AppError> {
        let posts = sqlx::query_as::<_, ClosedPost>(
            r#"
            SELECT *
            FROM (
                SELECT
                    p.id, p.creationdate, p.viewcount, p.lasteditdate,
                    p.lastactivitydate, p.title, p.closeddate,
                    round((extract(EPOCH FROM p.closeddate - p.creationdate) / 60)::numeric, 2)::float8
                        AS duration
                FROM posts p
                WHERE p.closeddate IS NOT NULL
            ) closed
            WHERE closed.duration <= $1
            ORDER BY closed.closeddate DESC, closed.id DESC
            LIMIT $2
            "#,
        )
        .bind(max_minutes)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn search(&self, term: &str, limit: i64) -> Result<Vec<PostMatch>, AppError> {
        let posts = sqlx::query_as::<_, PostMatch>(
            r#"
            SELECT
                p.id, p.creationdate, p.viewcount, p.lasteditdate,
                p.lastactivitydate, p.title, p.body, p.answercount, p.closeddate,
                ARRAY(
                    SELECT t.tagname
                    FROM post_tags pt
                    JOIN tags t ON t.id = pt.tag_id
                    WHERE pt.post_id = p.id
                    ORDER BY t.tagname
                ) AS tags
            FROM posts p
            WHERE p.title ILIKE $1 OR p.body ILIKE $1
            ORDER BY p.creationdate DESC, p.id DESC
            LIMIT $2
            "#,
        )
        .bind(like_pattern::contains(term))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn find_thread(&self, post_id: i32, limit: i64) -> Result<Vec<ThreadPost>, AppError> {
        let posts = sqlx::query_as::<_, ThreadPost>(
            r#"
            SELECT
                p.id,
                p.parentid,
                u.displayname,
                p.body,
                p.creationdate AS created_at
            FROM posts p
            LEFT JOIN users u ON u.id = p.owneruserid
            WHERE (p.id = $1 OR p.parentid = $1)
              AND EXISTS (SELECT 1 FROM posts parent WHERE parent.id = $1)
            ORDER BY p.creationdate ASC, p.id ASC
            LIMIT $2
            "#,
        )
        .bind(post_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }
}
