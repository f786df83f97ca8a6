//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and are generic over
//! `ConnectionTrait`, so the same repository code runs against the shared
//! connection pool or inside an open transaction. The booking lifecycle
//! manager relies on that to keep its read-check-write sequences atomic.

pub mod activity_log;
pub mod blackout_date;
pub mod booking;
pub mod minimum_stay_rule;
pub mod room_type;
pub mod user;

#[cfg(test)]
mod test;
