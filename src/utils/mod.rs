//! Helpers shared by the persistence and application layers.
//!
//! - [`db_error`] - Classifying `sqlx` errors into retryable and internal
//! - [`like_pattern`] - Escaping user search terms for `ILIKE`
//! - [`interval`] - Formatting comment time gaps

pub mod db_error;
pub mod interval;
pub mod like_pattern;
