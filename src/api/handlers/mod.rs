//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod posts;
pub mod status;
pub mod tags;
pub mod users;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use posts::{post_thread_handler, posts_handler};
pub use status::status_handler;
pub use tags::{comment_at_position_handler, comment_timing_handler, tag_stats_handler};
pub use users::{badge_history_handler, post_users_handler, user_friends_handler};
