//! PostgreSQL implementation of tag analytics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{CommentGap, PositionedComment, WeekdayShare};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;
use crate::utils::like_pattern;

/// PostgreSQL repository for per-tag aggregations.
///
/// Tag filters use `EXISTS` over `post_tags` so a post carrying several
/// matching tags is counted once.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn weekday_shares(&self, tag: &str) -> Result<Vec<WeekdayShare>, AppError> {
        let shares = sqlx::query_as::<_, WeekdayShare>(
            r#"
            WITH weekdays AS (
                SELECT generate_series(1, 7) AS isodow
            ), totals AS (
                SELECT extract(ISODOW FROM p.creationdate)::int4 AS isodow, count(*) AS total
                FROM posts p
                GROUP BY 1
            ), tagged AS (
                SELECT extract(ISODOW FROM p.creationdate)::int4 AS isodow, count(*) AS tagged
                FROM posts p
                WHERE EXISTS (
                    SELECT 1
                    FROM post_tags pt
                    JOIN tags t ON t.id = pt.tag_id
                    WHERE pt.post_id = p.id AND t.tagname ILIKE $1
                )
                GROUP BY 1
            )
            SELECT
                w.isodow,
                COALESCE(
                    round(tagged.tagged * 100.0 / NULLIF(totals.total, 0), 2),
                    0
                )::float8 AS percentage
            FROM weekdays w
            LEFT JOIN totals ON totals.isodow = w.isodow
            LEFT JOIN tagged ON tagged.isodow = w.isodow
            ORDER BY w.isodow
            "#,
        )
        .bind(like_pattern::contains(tag))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(shares)
    }

    async fn comment_gaps(
        &self,
        tag: &str,
        min_comments: i32,
    ) -> Result<Vec<CommentGap>, AppError> {
        let gaps = sqlx::query_as::<_, CommentGap>(
            r#"
            WITH tagged_posts AS (
                SELECT p.id, p.title, p.creationdate
                FROM posts p
                WHERE p.commentcount > $2
                  AND EXISTS (
                      SELECT 1
                      FROM post_tags pt
                      JOIN tags t ON t.id = pt.tag_id
                      WHERE pt.post_id = p.id AND t.tagname ILIKE $1
                  )
            ), gaps AS (
                SELECT
                    tp.id AS post_id,
                    tp.title,
                    u.displayname,
                    c.text,
                    tp.creationdate AS post_created_at,
                    c.creationdate AS created_at,
                    c.id AS comment_id,
                    c.creationdate - lag(c.creationdate, 1, tp.creationdate) OVER (
                        PARTITION BY tp.id
                        ORDER BY c.creationdate ASC, c.id ASC
                    ) AS diff
                FROM tagged_posts tp
                JOIN comments c ON c.postid = tp.id
                LEFT JOIN users u ON u.id = c.userid
            )
            SELECT
                post_id,
                title,
                displayname,
                text,
                post_created_at,
                created_at,
                (extract(EPOCH FROM diff) * 1000)::float8 AS diff_ms,
                (extract(EPOCH FROM avg(diff) OVER (
                    PARTITION BY post_id
                    ORDER BY created_at ASC, comment_id ASC
                    ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW
                )) * 1000)::float8 AS avg_ms
            FROM gaps
            ORDER BY created_at ASC, comment_id ASC
            "#,
        )
        .bind(like_pattern::contains(tag))
        .bind(min_comments)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(gaps)
    }

    async fn comments_at_position(
        &self,
        tag: &str,
        position: i32,
        limit: i64,
    ) -> Result<Vec<PositionedComment>, AppError> {
        let comments = sqlx::query_as::<_, PositionedComment>(
            r#"
            WITH ranked AS (
                SELECT
                    c.id,
                    u.displayname,
                    p.body,
                    c.text,
                    c.score,
                    p.id AS post_id,
                    p.creationdate AS post_created_at,
                    row_number() OVER (
                        PARTITION BY p.id
                        ORDER BY c.creationdate ASC, c.id ASC
                    ) AS comment_position
                FROM posts p
                JOIN comments c ON c.postid = p.id
                LEFT JOIN users u ON u.id = c.userid
                WHERE EXISTS (
                    SELECT 1
                    FROM post_tags pt
                    JOIN tags t ON t.id = pt.tag_id
                    WHERE pt.post_id = p.id AND t.tagname ILIKE $1
                )
            )
            SELECT id, displayname, body, text, score, comment_position::int4 AS position
            FROM ranked
            WHERE comment_position = $2
            ORDER BY post_created_at ASC, post_id ASC
            LIMIT $3
            "#,
        )
        .bind(like_pattern::contains(tag))
        .bind(position)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(comments)
    }
}
