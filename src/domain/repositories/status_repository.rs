//! Repository trait for database server metadata.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Returns the database server's version banner (`SELECT version()`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    async fn server_version(&self) -> Result<String, AppError>;
}
