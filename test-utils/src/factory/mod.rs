//! Entity factories for creating test data with sensible defaults.
//!
//! Each factory offers a builder pattern for overriding individual fields and a
//! shorthand function for the common case. Factories insert directly through
//! the entity layer so tests can seed any state, including states the service
//! layer would refuse to create.

pub mod blackout_date;
pub mod booking;
pub mod helpers;
pub mod minimum_stay_rule;
pub mod room_type;
