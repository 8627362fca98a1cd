//! Service reporting database server status.

use std::sync::Arc;

use crate::domain::repositories::StatusRepository;
use crate::error::AppError;

pub struct StatusService<R: StatusRepository> {
    repository: Arc<R>,
}

impl<R: StatusRepository> StatusService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Database server version banner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the database cannot be reached.
    pub async fn database_version(&self) -> Result<String, AppError> {
        self.repository.server_version().await
    }
}
