//! Business logic layer.
//!
//! Services own the booking domain rules: availability arithmetic,
//! blackout and minimum-stay validation, and the booking lifecycle state
//! machine. Controllers stay thin and delegate here.

pub mod availability;
pub mod booking;
pub mod constraint;
