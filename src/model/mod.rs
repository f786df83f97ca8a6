//! Wire DTOs and operation-specific parameter types.
//!
//! Field names serialize in camelCase to stay compatible with the admin
//! frontend consuming the original API.

pub mod activity_log;
pub mod api;
pub mod booking;
pub mod user;
