#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use query_gateway::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::from_pool(pool)
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub async fn create_test_user(pool: &PgPool, id: i32, name: &str, created: &str) {
    sqlx::query(
        "INSERT INTO users (id, reputation, creationdate, displayname) VALUES ($1, 1, $2, $3)",
    )
    .bind(id)
    .bind(ts(created))
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_post(
    pool: &PgPool,
    id: i32,
    owner: Option<i32>,
    title: &str,
    body: &str,
    created: &str,
) {
    sqlx::query(
        "INSERT INTO posts (id, owneruserid, title, body, creationdate) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(owner)
    .bind(title)
    .bind(body)
    .bind(ts(created))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_answer(pool: &PgPool, id: i32, parent: i32, owner: Option<i32>, created: &str) {
    sqlx::query(
        "INSERT INTO posts (id, posttypeid, parentid, owneruserid, body, creationdate) VALUES ($1, 2, $2, $3, 'answer', $4)",
    )
    .bind(id)
    .bind(parent)
    .bind(owner)
    .bind(ts(created))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn close_post(pool: &PgPool, id: i32, closed: &str) {
    sqlx::query("UPDATE posts SET closeddate = $2 WHERE id = $1")
        .bind(id)
        .bind(ts(closed))
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a comment and keeps `posts.commentcount` in step, as the dump does.
pub async fn create_test_comment(
    pool: &PgPool,
    id: i32,
    post_id: i32,
    user_id: Option<i32>,
    text: &str,
    created: &str,
) {
    sqlx::query(
        "INSERT INTO comments (id, postid, userid, text, score, creationdate) VALUES ($1, $2, $3, $4, 0, $5)",
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .bind(ts(created))
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("UPDATE posts SET commentcount = commentcount + 1 WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_tag(pool: &PgPool, id: i32, name: &str) {
    sqlx::query("INSERT INTO tags (id, tagname) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn tag_post(pool: &PgPool, post_id: i32, tag_id: i32) {
    sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
        .bind(post_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_badge(pool: &PgPool, id: i32, user_id: i32, name: &str, date: &str) {
    sqlx::query("INSERT INTO badges (id, userid, name, date) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(ts(date))
        .execute(pool)
        .await
        .unwrap();
}
