//! Booking factory for creating test bookings.
//!
//! Inserts directly at the entity layer, bypassing the lifecycle manager's
//! validation, so tests can seed bookings in any state.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, "Deluxe Room")
///     .check_in(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap())
///     .check_out(NaiveDate::from_ymd_opt(2025, 12, 5).unwrap())
///     .number_of_rooms(15)
///     .status(BookingStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    customer_name: String,
    company: String,
    sale_owner: String,
    phone: String,
    email: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    room_type: String,
    number_of_rooms: i32,
    rate: f64,
    payment_method: String,
    status: BookingStatus,
    hold_expiry: Option<DateTime<Utc>>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - code: `"BKTEST-{id}"` where id is auto-incremented
    /// - customer_name: `"Customer {id}"`
    /// - stay: 2025-12-01 to 2025-12-05
    /// - number_of_rooms: `1`, rate: `2500.0`
    /// - status: `Pending` with a hold expiry 7 days out
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `room_type` - Room type display name the booking reserves
    pub fn new(db: &'a DatabaseConnection, room_type: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("BKTEST-{}", id),
            customer_name: format!("Customer {}", id),
            company: "Walk-in / Individual".to_string(),
            sale_owner: "Test Owner".to_string(),
            phone: "081-000-0000".to_string(),
            email: format!("customer{}@example.com", id),
            check_in: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 12, 5).unwrap(),
            room_type: room_type.into(),
            number_of_rooms: 1,
            rate: 2500.0,
            payment_method: "Credit Card".to_string(),
            status: BookingStatus::Pending,
            hold_expiry: Some(Utc::now() + chrono::Duration::days(7)),
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the booking code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the customer name.
    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    /// Sets the company name.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Sets the sale owner.
    pub fn sale_owner(mut self, sale_owner: impl Into<String>) -> Self {
        self.sale_owner = sale_owner.into();
        self
    }

    /// Sets the contact phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the check-in date.
    pub fn check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = check_in;
        self
    }

    /// Sets the exclusive check-out date.
    pub fn check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = check_out;
        self
    }

    /// Sets the number of rooms reserved.
    pub fn number_of_rooms(mut self, number_of_rooms: i32) -> Self {
        self.number_of_rooms = number_of_rooms;
        self
    }

    /// Sets the nightly rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the hold expiry timestamp.
    pub fn hold_expiry(mut self, hold_expiry: Option<DateTime<Utc>>) -> Self {
        self.hold_expiry = hold_expiry;
        self
    }

    /// Sets the free-text notes.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Sets the creation timestamp. Useful for deterministic ordering in
    /// pagination tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            customer_name: ActiveValue::Set(self.customer_name),
            company: ActiveValue::Set(self.company),
            sale_owner: ActiveValue::Set(self.sale_owner),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            room_type: ActiveValue::Set(self.room_type),
            number_of_rooms: ActiveValue::Set(self.number_of_rooms),
            rate: ActiveValue::Set(self.rate),
            payment_method: ActiveValue::Set(self.payment_method),
            status: ActiveValue::Set(self.status),
            hold_expiry: ActiveValue::Set(self.hold_expiry),
            documents: ActiveValue::Set(None),
            notes: ActiveValue::Set(self.notes),
            cancel_reason: ActiveValue::Set(None),
            cancel_documents: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            cancelled_by: ActiveValue::Set(None),
            amendment_logs: ActiveValue::Set(None),
            last_amended_at: ActiveValue::Set(None),
            last_amended_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given room type and stay.
///
/// Shorthand for the factory chain used in most availability tests.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_type: impl Into<String>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    number_of_rooms: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_type)
        .check_in(check_in)
        .check_out(check_out)
        .number_of_rooms(number_of_rooms)
        .build()
        .await
}
