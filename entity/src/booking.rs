use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
///
/// Transitions are one-directional: a PENDING booking is either confirmed
/// or voided, a CONFIRMED booking can only be cancelled, and CANCELLED and
/// VOID are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
    #[sea_orm(string_value = "VOID")]
    Void,
}

impl BookingStatus {
    /// Whether the booking still holds inventory. CANCELLED and VOID
    /// bookings never count against room availability.
    pub fn holds_inventory(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Whether the booking is in a terminal state (read-only).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Void)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-readable booking code, e.g. `BK251201-X7PQ`.
    #[sea_orm(unique)]
    pub code: String,
    pub customer_name: String,
    pub company: String,
    pub sale_owner: String,
    pub phone: String,
    pub email: String,
    /// First night of the stay.
    pub check_in: Date,
    /// Exclusive end of the stay; the night before check-out is the last
    /// night held.
    pub check_out: Date,
    /// Room type display name. Not a foreign key; see crate docs.
    pub room_type: String,
    pub number_of_rooms: i32,
    pub rate: f64,
    pub payment_method: String,
    pub status: BookingStatus,
    /// Informational hold deadline set on creation, cleared on confirm.
    pub hold_expiry: Option<DateTimeUtc>,
    /// JSON array of document references.
    pub documents: Option<Json>,
    pub notes: Option<String>,
    pub cancel_reason: Option<String>,
    /// JSON array of cancellation document references.
    pub cancel_documents: Option<Json>,
    pub cancelled_at: Option<DateTimeUtc>,
    pub cancelled_by: Option<String>,
    /// Append-only JSON array of amendment log entries.
    pub amendment_logs: Option<Json>,
    pub last_amended_at: Option<DateTimeUtc>,
    pub last_amended_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
