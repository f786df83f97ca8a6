use chrono::{Duration, NaiveDate};
use sea_orm::ConnectionTrait;

use crate::{
    data::{booking::BookingRepository, room_type::RoomTypeRepository},
    error::booking::BookingError,
    error::AppError,
};

/// Computes remaining room availability for a stay.
///
/// Generic over the connection so the lifecycle manager can run the same
/// computation inside an open transaction when it needs the result to stay
/// valid until its write commits.
pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Computes the number of rooms of `room_type` available across every
    /// night of `[check_in, check_out)`.
    ///
    /// The result is the minimum over the nights of the range: for each
    /// night, the room type's total minus the rooms held by overlapping
    /// `PENDING` and `CONFIRMED` bookings. Oversold inventory clamps to
    /// zero rather than going negative.
    ///
    /// # Arguments
    /// - `exclude_booking_id`: Booking whose own held rooms should not
    ///   count, used when re-validating that booking's modification
    ///
    /// # Returns
    /// - `Ok(i64)`: Rooms available on the tightest night
    /// - `Err(AppError)`: Validation error for an inverted range, not-found
    ///   for an unknown room type, or a database error
    pub async fn compute(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: &str,
        exclude_booking_id: Option<i32>,
    ) -> Result<i64, AppError> {
        if check_out <= check_in {
            return Err(BookingError::Validation(
                "checkOut must be after checkIn".to_string(),
            )
            .into());
        }

        let room = RoomTypeRepository::new(self.db)
            .find_by_name(room_type)
            .await?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Room type '{room_type}' not found"))
            })?;

        let overlapping = BookingRepository::new(self.db)
            .find_overlapping(room_type, check_in, check_out, exclude_booking_id)
            .await?;

        let total = i64::from(room.total_rooms);
        let mut available = total;
        let mut night = check_in;
        while night < check_out {
            let booked: i64 = overlapping
                .iter()
                .filter(|b| b.check_in <= night && night < b.check_out)
                .map(|b| i64::from(b.number_of_rooms))
                .sum();
            available = available.min(total - booked);
            night += Duration::days(1);
        }

        Ok(available.max(0))
    }
}
