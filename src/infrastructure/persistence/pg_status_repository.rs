//! PostgreSQL implementation of status repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::StatusRepository;
use crate::error::AppError;

pub struct PgStatusRepository {
    pool: Arc<PgPool>,
}

impl PgStatusRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    async fn server_version(&self) -> Result<String, AppError> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(version)
    }
}
