//! Post query service.

use std::sync::Arc;

use crate::domain::entities::{ClosedPost, PostMatch, ThreadPost};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Service for post listings.
///
/// A `limit` of zero is answered with an empty list without touching the
/// database.
pub struct PostService<R: PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a new post service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Closed posts that stayed open at most `max_minutes`, newest close first.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn closed_within(
        &self,
        max_minutes: i32,
        limit: i64,
    ) -> Result<Vec<ClosedPost>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.repository.find_closed_within(max_minutes, limit).await
    }

    /// Posts whose title or body contains `term`, newest first.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<PostMatch>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.repository.search(term, limit).await
    }

    /// A post followed by its direct replies, in creation order.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn thread(&self, post_id: i32, limit: i64) -> Result<Vec<ThreadPost>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.repository.find_thread(post_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPostRepository;
    use chrono::Utc;

    fn thread_post(id: i32, parentid: Option<i32>) -> ThreadPost {
        ThreadPost {
            id,
            parentid,
            displayname: Some("alice".to_string()),
            body: Some("<p>body</p>".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_zero_limit_skips_repository() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo.expect_find_closed_within().times(0);
        mock_repo.expect_search().times(0);
        mock_repo.expect_find_thread().times(0);

        let service = PostService::new(Arc::new(mock_repo));

        assert!(service.closed_within(60, 0).await.unwrap().is_empty());
        assert!(service.search("sql", 0).await.unwrap().is_empty());
        assert!(service.thread(1, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_passes_term_and_limit() {
        let mut mock_repo = MockPostRepository::new();

        mock_repo
            .expect_search()
            .withf(|term, limit| term == "linux" && *limit == 3)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = PostService::new(Arc::new(mock_repo));

        assert!(service.search("linux", 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_thread_returns_parent_and_replies() {
        let mut mock_repo = MockPostRepository::new();

        mock_repo
            .expect_find_thread()
            .withf(|post_id, limit| *post_id == 1 && *limit == 10)
            .times(1)
            .returning(|_, _| Ok(vec![thread_post(1, None), thread_post(2, Some(1))]));

        let service = PostService::new(Arc::new(mock_repo));
        let thread = service.thread(1, 10).await.unwrap();

        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].parentid, None);
        assert_eq!(thread[1].parentid, Some(1));
    }

    #[tokio::test]
    async fn test_closed_within_propagates_errors() {
        let mut mock_repo = MockPostRepository::new();

        mock_repo
            .expect_find_closed_within()
            .times(1)
            .returning(|_, _| Err(AppError::unavailable("down")));

        let service = PostService::new(Arc::new(mock_repo));
        let result = service.closed_within(10, 5).await;

        assert!(matches!(result, Err(AppError::Unavailable { .. })));
    }
}
