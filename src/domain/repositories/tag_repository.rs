//! Repository trait for tag analytics.

use crate::domain::entities::{CommentGap, PositionedComment, WeekdayShare};
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregations over posts and comments filtered by tag name.
///
/// Tag arguments are matched as case-insensitive literal substrings of
/// `tags.tagname`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Per ISO weekday, the percentage of posts created that day carrying a
    /// matching tag. May omit weekdays with no posts at all.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn weekday_shares(&self, tag: &str) -> Result<Vec<WeekdayShare>, AppError>;

    /// Comment response times on tagged posts having more than
    /// `min_comments` comments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn comment_gaps(&self, tag: &str, min_comments: i32)
    -> Result<Vec<CommentGap>, AppError>;

    /// The comment at 1-based `position` of each tagged post, ordered by post
    /// creation date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn comments_at_position(
        &self,
        tag: &str,
        position: i32,
        limit: i64,
    ) -> Result<Vec<PositionedComment>, AppError>;
}
