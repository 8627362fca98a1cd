//! PostgreSQL repository implementations.
//!
//! Every query is a fixed statement with `$n` placeholders; request values
//! are always passed through `bind`, never formatted into SQL text. Each call
//! borrows a connection from the shared pool for the duration of one
//! statement.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Commenters, friends, badge history
//! - [`PgPostRepository`] - Closed posts, search, threads
//! - [`PgTagRepository`] - Weekday shares and comment analytics
//! - [`PgStatusRepository`] - Server version

pub mod pg_post_repository;
pub mod pg_status_repository;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_post_repository::PgPostRepository;
pub use pg_status_repository::PgStatusRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
