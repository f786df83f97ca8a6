//! SeaORM entity models for the roomboard database schema.
//!
//! Each module defines one table. Bookings reference room types by display
//! name rather than by foreign key; that association is inherited from the
//! original data model and preserved for API compatibility.

pub mod activity_log;
pub mod blackout_date;
pub mod booking;
pub mod minimum_stay_rule;
pub mod room_type;
pub mod user;

pub mod prelude {
    pub use super::activity_log::Entity as ActivityLog;
    pub use super::blackout_date::Entity as BlackoutDate;
    pub use super::booking::Entity as Booking;
    pub use super::minimum_stay_rule::Entity as MinimumStayRule;
    pub use super::room_type::Entity as RoomType;
    pub use super::user::Entity as User;
}
