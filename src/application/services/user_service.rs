//! User activity service.

use std::sync::Arc;

use crate::domain::entities::{TimelineEntry, User, timeline_from_pairs};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for user-centric queries.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Users who commented on a post. An unknown post yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn post_commenters(&self, post_id: i32) -> Result<Vec<User>, AppError> {
        self.repository.find_post_commenters(post_id).await
    }

    /// Users sharing a discussion with the given user.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn friends(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        self.repository.find_friends(user_id).await
    }

    /// The user's post/badge timeline.
    ///
    /// Each badge is preceded by the post that led up to it; both entries
    /// carry the same 1-based position.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn badge_history(&self, user_id: i32) -> Result<Vec<TimelineEntry>, AppError> {
        let pairs = self.repository.find_badge_post_pairs(user_id).await?;
        Ok(timeline_from_pairs(pairs))
    }
}
