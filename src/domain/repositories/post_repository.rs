//! Repository trait for post queries.

use crate::domain::entities::{ClosedPost, PostMatch, ThreadPost};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists closed posts that were open for at most `max_minutes`.
    ///
    /// Posts without a close date are never returned. Ordered by close date,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_closed_within(
        &self,
        max_minutes: i32,
        limit: i64,
    ) -> Result<Vec<ClosedPost>, AppError>;

    /// Case-insensitive substring search over post titles and bodies.
    ///
    /// `term` is matched literally. Ordered by creation date, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn search(&self, term: &str, limit: i64) -> Result<Vec<PostMatch>, AppError>;

    /// Returns a post and its direct replies in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_thread(&self, post_id: i32, limit: i64) -> Result<Vec<ThreadPost>, AppError>;
}
