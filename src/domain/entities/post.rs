//! Post rows returned by the post queries.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A closed post together with how long it stayed open.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ClosedPost {
    pub id: i32,
    pub creationdate: DateTime<Utc>,
    pub viewcount: Option<i32>,
    pub lasteditdate: Option<DateTime<Utc>>,
    pub lastactivitydate: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub closeddate: DateTime<Utc>,
    /// Minutes between creation and closing, rounded to two decimals.
    pub duration: f64,
}

/// A post whose title or body matched a free-text search.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PostMatch {
    pub id: i32,
    pub creationdate: DateTime<Utc>,
    pub viewcount: Option<i32>,
    pub lasteditdate: Option<DateTime<Utc>>,
    pub lastactivitydate: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub answercount: Option<i32>,
    pub closeddate: Option<DateTime<Utc>>,
    /// Tag names sorted alphabetically.
    pub tags: Vec<String>,
}

/// A post or one of its direct replies.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ThreadPost {
    pub id: i32,
    pub parentid: Option<i32>,
    pub displayname: Option<String>,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}
