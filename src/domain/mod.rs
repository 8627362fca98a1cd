//! Domain layer: result row types and repository contracts.
//!
//! The StackExchange tables are owned by the database; the domain layer only
//! describes the shapes the gateway reads out of them.
//!
//! # Architecture
//!
//! - [`entities`] - Row types and the reshaping rules applied to them
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Post-processing lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
