//! Tag analytics service.

use std::sync::Arc;

use crate::domain::entities::{CommentTiming, PositionedComment, WeekdayStats};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// Service for per-tag statistics and comment analytics.
pub struct TagService<R: TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    /// Creates a new tag service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Percentage of posts per weekday carrying a matching tag.
    ///
    /// All seven weekdays are always present; days without tagged posts
    /// report `0`.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn weekday_stats(&self, tag: &str) -> Result<WeekdayStats, AppError> {
        let shares = self.repository.weekday_shares(tag).await?;
        Ok(WeekdayStats::from_shares(&shares))
    }

    /// Comment response times on busy tagged posts.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn comment_timings(
        &self,
        tag: &str,
        min_comments: i32,
    ) -> Result<Vec<CommentTiming>, AppError> {
        let gaps = self.repository.comment_gaps(tag, min_comments).await?;
        Ok(gaps.into_iter().map(CommentTiming::from).collect())
    }

    /// The `position`-th comment of each tagged post.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn comments_at_position(
        &self,
        tag: &str,
        position: i32,
        limit: i64,
    ) -> Result<Vec<PositionedComment>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.repository
            .comments_at_position(tag, position, limit)
            .await
    }
}
