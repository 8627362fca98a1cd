//! Repository trait definitions for the domain layer.
//!
//! The gateway is read-only: every repository method runs exactly one
//! parameterized statement against the StackExchange schema.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Commenters, friends, badge history
//! - [`PostRepository`] - Closed posts, search, threads
//! - [`TagRepository`] - Weekday shares and comment analytics per tag
//! - [`StatusRepository`] - Database server version
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod post_repository;
pub mod status_repository;
pub mod tag_repository;
pub mod user_repository;

pub use post_repository::PostRepository;
pub use status_repository::StatusRepository;
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use status_repository::MockStatusRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
