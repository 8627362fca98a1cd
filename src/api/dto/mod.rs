//! Data Transfer Objects for API requests and responses.
//!
//! Row entities from [`crate::domain::entities`] are serialized directly
//! inside the envelopes defined here; this module adds the envelopes and
//! the validated request parameters.

pub mod envelope;
pub mod health;
pub mod params;
pub mod status;
