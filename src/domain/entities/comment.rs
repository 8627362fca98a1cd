//! Comment rows for the tag/comment analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::interval::format_millis;

/// Raw timing row as produced by the database.
///
/// `diff_ms` is the gap to the previous comment on the same post (or to the
/// post itself for the first comment); `avg_ms` is the running average of
/// those gaps up to and including this comment.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CommentGap {
    pub post_id: i32,
    pub title: Option<String>,
    pub displayname: Option<String>,
    pub text: Option<String>,
    pub post_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub diff_ms: f64,
    pub avg_ms: f64,
}

/// A comment with its response-time statistics, gaps rendered as `HH:MM:SS.mmm`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentTiming {
    pub post_id: i32,
    pub title: Option<String>,
    pub displayname: Option<String>,
    pub text: Option<String>,
    pub post_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub diff: String,
    pub avg: String,
}

impl From<CommentGap> for CommentTiming {
    fn from(gap: CommentGap) -> Self {
        Self {
            post_id: gap.post_id,
            title: gap.title,
            displayname: gap.displayname,
            text: gap.text,
            post_created_at: gap.post_created_at,
            created_at: gap.created_at,
            diff: format_millis(gap.diff_ms),
            avg: format_millis(gap.avg_ms),
        }
    }
}

/// The comment found at a given 1-based position in a post's discussion.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PositionedComment {
    pub id: i32,
    pub displayname: Option<String>,
    /// Body of the post the comment belongs to.
    pub body: Option<String>,
    pub text: Option<String>,
    pub score: Option<i32>,
    pub position: i32,
}
