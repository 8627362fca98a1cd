//! Repository trait for user-centric queries.

use crate::domain::entities::{BadgePostPair, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to users and their activity.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_users.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists distinct users who commented on a post, most recent commenter first.
    ///
    /// `creationdate` carries the user's latest comment time on that post,
    /// not the account creation date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_post_commenters(&self, post_id: i32) -> Result<Vec<User>, AppError>;

    /// Lists users who commented on posts the given user wrote or commented on.
    ///
    /// Ordered by account creation date, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_friends(&self, user_id: i32) -> Result<Vec<User>, AppError>;

    /// Pairs each of the user's badges with the latest post written before it.
    ///
    /// A post appears at most once, next to the earliest badge that followed
    /// it. Pairs are ordered by badge date, then badge id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_badge_post_pairs(&self, user_id: i32) -> Result<Vec<BadgePostPair>, AppError>;
}
