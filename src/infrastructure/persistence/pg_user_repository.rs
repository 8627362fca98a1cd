//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{BadgePostPair, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user-centric queries.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_post_commenters(&self, post_id: i32) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                u.id, u.reputation, commenters.last_commented AS creationdate,
                u.displayname, u.lastaccessdate, u.websiteurl, u.location,
                u.aboutme, u.views, u.upvotes, u.downvotes, u.profileimageurl,
                u.age, u.accountid
            FROM users u
            JOIN (
                SELECT c.userid, max(c.creationdate) AS last_commented
                FROM comments c
                WHERE c.postid = $1
                GROUP BY c.userid
            ) commenters ON commenters.userid = u.id
            ORDER BY commenters.last_commented DESC, u.id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn find_friends(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                u.id, u.reputation, u.creationdate, u.displayname,
                u.lastaccessdate, u.websiteurl, u.location, u.aboutme,
                u.views, u.upvotes, u.downvotes, u.profileimageurl,
                u.age, u.accountid
            FROM users u
            WHERE u.id IN (
                SELECT c.userid
                FROM comments c
                WHERE c.postid IN (
                    SELECT p.id FROM posts p WHERE p.owneruserid = $1
                    UNION
                    SELECT own.postid FROM comments own WHERE own.userid = $1
                )
            )
            ORDER BY u.creationdate ASC, u.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn find_badge_post_pairs(&self, user_id: i32) -> Result<Vec<BadgePostPair>, AppError> {
        // badge_rank picks the latest earlier post per badge; post_rank keeps
        // only the first badge each post led to.
        let pairs = sqlx::query_as::<_, BadgePostPair>(
            r#"
            WITH preceding AS (
                SELECT
                    b.id AS badge_id,
                    b.name AS badge_name,
                    b.date AS badge_date,
                    p.id AS post_id,
                    p.title AS post_title,
                    p.creationdate AS post_date,
                    row_number() OVER (
                        PARTITION BY b.id
                        ORDER BY p.creationdate DESC, p.id DESC
                    ) AS badge_rank
                FROM badges b
                JOIN posts p
                  ON p.owneruserid = b.userid
                 AND p.creationdate < b.date
                WHERE b.userid = $1
            ), first_badge AS (
                SELECT
                    preceding.*,
                    row_number() OVER (
                        PARTITION BY post_id
                        ORDER BY badge_date ASC, badge_id ASC
                    ) AS post_rank
                FROM preceding
                WHERE badge_rank = 1
            )
            SELECT post_id, post_title, post_date, badge_id, badge_name, badge_date
            FROM first_badge
            WHERE post_rank = 1
            ORDER BY badge_date ASC, badge_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(pairs)
    }
}
