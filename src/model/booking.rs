use chrono::{DateTime, NaiveDate, Utc};
use entity::booking::BookingStatus;
use serde::{Deserialize, Serialize};

use crate::model::api::PaginationDto;

/// Full booking representation returned by every booking endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    /// Human-readable booking code, usable interchangeably with `id` in URLs.
    pub code: String,
    pub customer_name: String,
    pub company: String,
    pub sale_owner: String,
    pub phone: String,
    pub email: String,
    pub check_in: NaiveDate,
    /// Exclusive check-out date.
    pub check_out: NaiveDate,
    pub room_type: String,
    pub number_of_rooms: i32,
    pub rate: f64,
    pub payment_method: String,
    pub status: BookingStatus,
    pub hold_expiry: Option<DateTime<Utc>>,
    pub documents: Vec<String>,
    pub notes: Option<String>,
    pub cancel_reason: Option<String>,
    pub cancel_documents: Vec<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancelled_by: Option<String>,
    /// Append-only amendment audit trail, oldest first.
    pub amendment_logs: Vec<AmendmentLogEntry>,
    pub last_amended_at: Option<DateTime<Utc>>,
    pub last_amended_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::booking::Model> for BookingDto {
    fn from(model: entity::booking::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            customer_name: model.customer_name,
            company: model.company,
            sale_owner: model.sale_owner,
            phone: model.phone,
            email: model.email,
            check_in: model.check_in,
            check_out: model.check_out,
            room_type: model.room_type,
            number_of_rooms: model.number_of_rooms,
            rate: model.rate,
            payment_method: model.payment_method,
            status: model.status,
            hold_expiry: model.hold_expiry,
            documents: parse_string_list(model.documents),
            notes: model.notes,
            cancel_reason: model.cancel_reason,
            cancel_documents: parse_string_list(model.cancel_documents),
            cancelled_at: model.cancelled_at,
            cancelled_by: model.cancelled_by,
            amendment_logs: model
                .amendment_logs
                .map(|logs| serde_json::from_value(logs).unwrap_or_default())
                .unwrap_or_default(),
            last_amended_at: model.last_amended_at,
            last_amended_by: model.last_amended_by,
            created_at: model.created_at,
        }
    }
}

fn parse_string_list(value: Option<serde_json::Value>) -> Vec<String> {
    value
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .unwrap_or_default()
}

/// Input for `POST /api/bookings`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub customer_name: String,
    pub company: String,
    pub sale_owner: String,
    pub phone: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub number_of_rooms: i32,
    pub rate: f64,
    pub payment_method: String,
    #[serde(default)]
    pub documents: Vec<String>,
    pub notes: Option<String>,
}

/// Field-level patch shared by update and amend.
///
/// Every recognized field is enumerated explicitly; unknown keys are a
/// deserialization error rather than a silent no-op. `None` means "leave
/// unchanged". Status is deliberately absent: transitions go through the
/// confirm and cancel operations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BookingPatch {
    pub customer_name: Option<String>,
    pub company: Option<String>,
    pub sale_owner: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub number_of_rooms: Option<i32>,
    pub rate: Option<f64>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// Input for `POST /api/bookings/{id}/amend`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AmendBookingDto {
    pub changes: BookingPatch,
    pub amended_by: String,
}

/// Input for `POST /api/bookings/{id}/cancel`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingDto {
    pub reason: String,
    #[serde(default)]
    pub documents: Vec<String>,
    pub cancelled_by: String,
}

/// Input for `POST /api/bookings/check-availability`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
}

/// Result of an availability check.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AvailabilityDto {
    pub available: i64,
}

/// One recorded field mutation inside an amendment log entry.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FieldChange {
    /// Wire name of the field, e.g. `checkIn`.
    pub field: String,
    pub before: serde_json::Value,
    pub after: serde_json::Value,
}

/// One audited amendment. Entries are append-only and never rewritten.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentLogEntry {
    pub timestamp: DateTime<Utc>,
    pub amended_by: String,
    pub changes: Vec<FieldChange>,
}

/// Filters accepted by the booking list endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub room_type: Option<String>,
    pub sale_owner: Option<String>,
    pub company: Option<String>,
    /// Inclusive lower bound on check-in date.
    pub check_in_from: Option<NaiveDate>,
    /// Inclusive upper bound on check-in date.
    pub check_in_to: Option<NaiveDate>,
    /// Case-insensitive partial match ORed over code, customer name,
    /// phone, email, and company.
    pub search: Option<String>,
}

/// Query string for `GET /api/bookings`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    pub status: Option<BookingStatus>,
    pub room_type: Option<String>,
    pub sale_owner: Option<String>,
    pub company: Option<String>,
    pub check_in_from: Option<NaiveDate>,
    pub check_in_to: Option<NaiveDate>,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl ListBookingsQuery {
    pub fn filter(&self) -> BookingFilter {
        BookingFilter {
            status: self.status,
            room_type: self.room_type.clone(),
            sale_owner: self.sale_owner.clone(),
            company: self.company.clone(),
            check_in_from: self.check_in_from,
            check_in_to: self.check_in_to,
            search: self.search.clone(),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    50
}

/// Page of bookings with its pagination envelope.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBookingsDto {
    pub items: Vec<BookingDto>,
    pub pagination: PaginationDto,
}
