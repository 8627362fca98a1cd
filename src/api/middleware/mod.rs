//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, request deadlines and observability middleware.

pub mod rate_limit;
pub mod timeout;
pub mod tracing;
