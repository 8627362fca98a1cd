//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{PostService, StatusService, TagService, UserService};
use crate::infrastructure::persistence::{
    PgPostRepository, PgStatusRepository, PgTagRepository, PgUserRepository,
};

/// Services backing the HTTP handlers.
///
/// Cloned per request; all services share one connection pool and hold no
/// per-request state.
#[derive(Clone)]
pub struct AppState {
    pub status_service: Arc<StatusService<PgStatusRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub post_service: Arc<PostService<PgPostRepository>>,
    pub tag_service: Arc<TagService<PgTagRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repositories and services around `pool`.
    pub fn from_pool(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self {
            status_service: Arc::new(StatusService::new(Arc::new(PgStatusRepository::new(
                pool.clone(),
            )))),
            user_service: Arc::new(UserService::new(Arc::new(PgUserRepository::new(
                pool.clone(),
            )))),
            post_service: Arc::new(PostService::new(Arc::new(PgPostRepository::new(
                pool.clone(),
            )))),
            tag_service: Arc::new(TagService::new(Arc::new(PgTagRepository::new(pool)))),
        }
    }
}
