//! Application layer services.
//!
//! Services sit between HTTP handlers and repository traits. They own the
//! reshaping applied to raw rows and short-circuit requests that cannot
//! return anything.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Commenters, friends, badge timeline
//! - [`services::post_service::PostService`] - Closed posts, search, threads
//! - [`services::tag_service::TagService`] - Weekday stats and comment analytics
//! - [`services::status_service::StatusService`] - Database version

pub mod services;
