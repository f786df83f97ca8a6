use chrono::{Duration, NaiveDate, Utc};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::booking::{BookingRepository, NewBookingRecord},
    error::{booking::BookingError, AppError},
    model::{
        api::PaginationDto,
        booking::{
            AmendBookingDto, AmendmentLogEntry, AvailabilityDto, BookingDto, BookingFilter,
            BookingPatch, CancelBookingDto, CheckAvailabilityDto, CreateBookingDto, FieldChange,
            PaginatedBookingsDto,
        },
    },
    service::{availability::AvailabilityService, constraint::ConstraintService},
};

use entity::booking::BookingStatus;

/// How long a new booking holds its rooms before the hold lapses.
const HOLD_EXPIRY_DAYS: i64 = 7;

/// Attempts at generating a collision-free booking code before giving up.
const CODE_ATTEMPTS: usize = 5;

const MAX_PAGE_SIZE: u64 = 100;

/// Booking lifecycle manager.
///
/// Owns creation, modification, and the `PENDING -> CONFIRMED ->
/// CANCELLED / VOID` state machine. Every operation that checks
/// availability before writing runs the check and the write inside one
/// database transaction, so two concurrent requests cannot both pass the
/// check and jointly oversell a room type.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in `PENDING` status with a seven-day hold.
    ///
    /// Validates the input, then atomically checks availability, blackout
    /// dates, and minimum-stay rules before inserting. The generated
    /// booking code is `BK{yymmdd}-{4 random alphanumerics}`, retried on
    /// the rare collision.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The created booking
    /// - `Err(AppError)`: Validation failure, unknown room type, or a
    ///   business rule rejection; nothing was persisted
    pub async fn create(&self, dto: CreateBookingDto) -> Result<BookingDto, AppError> {
        Self::validate_required(&[
            ("customerName", &dto.customer_name),
            ("company", &dto.company),
            ("saleOwner", &dto.sale_owner),
            ("phone", &dto.phone),
            ("email", &dto.email),
            ("roomType", &dto.room_type),
            ("paymentMethod", &dto.payment_method),
        ])?;
        Self::validate_stay(dto.check_in, dto.check_out)?;
        Self::validate_rooms(dto.number_of_rooms)?;
        Self::validate_rate(dto.rate)?;

        let txn = self.db.begin().await?;

        Self::check_constraints(
            &txn,
            dto.check_in,
            dto.check_out,
            &dto.room_type,
            dto.number_of_rooms,
            None,
        )
        .await?;

        let repo = BookingRepository::new(&txn);
        let code = Self::generate_unique_code(&repo).await?;
        let booking = repo
            .insert(NewBookingRecord {
                code,
                customer_name: dto.customer_name,
                company: dto.company,
                sale_owner: dto.sale_owner,
                phone: dto.phone,
                email: dto.email,
                check_in: dto.check_in,
                check_out: dto.check_out,
                room_type: dto.room_type,
                number_of_rooms: dto.number_of_rooms,
                rate: dto.rate,
                payment_method: dto.payment_method,
                documents: dto.documents,
                notes: dto.notes,
                hold_expiry: Utc::now() + Duration::days(HOLD_EXPIRY_DAYS),
            })
            .await?;

        txn.commit().await?;
        Ok(booking.into())
    }

    /// Gets a booking by numeric id or booking code.
    pub async fn get(&self, reference: &str) -> Result<BookingDto, AppError> {
        Ok(self.get_model(reference).await?.into())
    }

    /// Gets a page of bookings matching the filter, newest first.
    ///
    /// Page numbers are 1-indexed; the page size is clamped to 1..=100.
    pub async fn list(
        &self,
        filter: &BookingFilter,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedBookingsDto, AppError> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let (items, total) = BookingRepository::new(self.db)
            .list(filter, page, limit)
            .await?;
        Ok(PaginatedBookingsDto {
            items: items.into_iter().map(BookingDto::from).collect(),
            pagination: PaginationDto::new(page, limit, total),
        })
    }

    /// Applies a non-audited patch to a booking.
    ///
    /// Rejected on cancelled or voided bookings. When the patch touches
    /// dates, room type, or room count, availability is re-checked with
    /// the booking's own held rooms excluded, and blackout and
    /// minimum-stay rules are re-validated for changed dates. The check
    /// and the write share one transaction.
    pub async fn update(
        &self,
        reference: &str,
        patch: BookingPatch,
    ) -> Result<BookingDto, AppError> {
        let booking = self.get_model(reference).await?;
        Self::guard_not_terminal(&booking, "update")?;
        let effective = EffectiveStay::of(&booking, &patch);
        effective.validate(&patch)?;

        let txn = self.db.begin().await?;
        effective.recheck_if_changed(&txn).await?;
        let updated = BookingRepository::new(&txn)
            .update_fields(booking, &patch)
            .await?;
        txn.commit().await?;
        Ok(updated.into())
    }

    /// Applies an audited amendment to a booking.
    ///
    /// Computes the per-field diff between the booking and the requested
    /// changes. When nothing actually differs, the booking is returned
    /// untouched and no audit entry is written. Otherwise exactly one
    /// entry is appended to the amendment trail recording who changed
    /// what, with before and after values. Inventory-relevant changes are
    /// re-validated like `update`.
    pub async fn amend(&self, reference: &str, dto: AmendBookingDto) -> Result<BookingDto, AppError> {
        let booking = self.get_model(reference).await?;
        Self::guard_not_terminal(&booking, "amend")?;

        let changes = Self::collect_changes(&booking, &dto.changes);
        if changes.is_empty() {
            return Ok(booking.into());
        }

        let effective = EffectiveStay::of(&booking, &dto.changes);
        effective.validate(&dto.changes)?;

        let txn = self.db.begin().await?;
        effective.recheck_if_changed(&txn).await?;
        let entry = AmendmentLogEntry {
            timestamp: Utc::now(),
            amended_by: dto.amended_by,
            changes,
        };
        let amended = BookingRepository::new(&txn)
            .amend_fields(booking, &dto.changes, entry)
            .await?;
        txn.commit().await?;
        Ok(amended.into())
    }

    /// Confirms a pending booking, clearing its hold expiry.
    ///
    /// Only `PENDING` bookings can be confirmed.
    pub async fn confirm(&self, reference: &str) -> Result<BookingDto, AppError> {
        let booking = self.get_model(reference).await?;
        if booking.status != BookingStatus::Pending {
            return Err(
                BookingError::InvalidState("Only pending bookings can be confirmed".to_string())
                    .into(),
            );
        }
        let confirmed = BookingRepository::new(self.db).confirm(booking).await?;
        Ok(confirmed.into())
    }

    /// Cancels a booking, releasing its inventory.
    ///
    /// A booking that never got confirmed goes to `VOID`; a confirmed one
    /// goes to `CANCELLED`. Cancelling an already cancelled booking is an
    /// invalid transition.
    pub async fn cancel(
        &self,
        reference: &str,
        dto: CancelBookingDto,
    ) -> Result<BookingDto, AppError> {
        let booking = self.get_model(reference).await?;
        if booking.status == BookingStatus::Cancelled {
            return Err(
                BookingError::InvalidState("Booking is already cancelled".to_string()).into(),
            );
        }
        let status = if booking.status == BookingStatus::Pending {
            BookingStatus::Void
        } else {
            BookingStatus::Cancelled
        };
        let cancelled = BookingRepository::new(self.db)
            .cancel(booking, status, dto.reason, dto.documents, dto.cancelled_by)
            .await?;
        Ok(cancelled.into())
    }

    /// Deletes a booking row outright. Intended for administrative
    /// cleanup; normal lifecycle ends at cancellation.
    pub async fn delete(&self, reference: &str) -> Result<(), AppError> {
        let booking = self.get_model(reference).await?;
        BookingRepository::new(self.db).delete(booking.id).await?;
        Ok(())
    }

    /// Computes availability for a prospective stay.
    pub async fn check_availability(
        &self,
        dto: CheckAvailabilityDto,
    ) -> Result<AvailabilityDto, AppError> {
        let available = AvailabilityService::new(self.db)
            .compute(dto.check_in, dto.check_out, &dto.room_type, None)
            .await?;
        Ok(AvailabilityDto { available })
    }

    async fn get_model(&self, reference: &str) -> Result<entity::booking::Model, AppError> {
        BookingRepository::new(self.db)
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Booking '{reference}' not found")).into()
            })
    }

    /// Runs the full pre-write validation gauntlet: availability first,
    /// then blackout dates, then minimum stay. Order matters for which
    /// rejection the caller sees when several rules would fire.
    async fn check_constraints<C: ConnectionTrait>(
        db: &C,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: &str,
        number_of_rooms: i32,
        exclude_booking_id: Option<i32>,
    ) -> Result<(), AppError> {
        let available = AvailabilityService::new(db)
            .compute(check_in, check_out, room_type, exclude_booking_id)
            .await?;
        if available < i64::from(number_of_rooms) {
            return Err(BookingError::InsufficientAvailability {
                available,
                requested: number_of_rooms,
            }
            .into());
        }

        let constraints = ConstraintService::new(db);
        let blackouts = constraints
            .blackout_dates_within(check_in, check_out)
            .await?;
        if !blackouts.is_empty() {
            return Err(BookingError::BlackoutViolation { dates: blackouts }.into());
        }
        if let Some((required, actual)) = constraints
            .minimum_stay_violation(check_in, check_out)
            .await?
        {
            return Err(BookingError::MinimumStayViolation { required, actual }.into());
        }
        Ok(())
    }

    async fn generate_unique_code<C: ConnectionTrait>(
        repo: &BookingRepository<'_, C>,
    ) -> Result<String, AppError> {
        for _ in 0..CODE_ATTEMPTS {
            let code = Self::generate_code();
            if !repo.code_exists(&code).await? {
                return Ok(code);
            }
        }
        Err(AppError::InternalError(
            "Could not generate a unique booking code".to_string(),
        ))
    }

    fn generate_code() -> String {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(4)
            .map(char::from)
            .collect();
        format!("BK{}-{}", Utc::now().format("%y%m%d"), suffix.to_uppercase())
    }

    /// Diffs a patch against the current booking, producing one
    /// `FieldChange` per field whose requested value actually differs.
    /// Field names use their wire spelling.
    fn collect_changes(booking: &entity::booking::Model, patch: &BookingPatch) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        push_change(
            &mut changes,
            "customerName",
            &booking.customer_name,
            patch.customer_name.as_ref(),
        );
        push_change(&mut changes, "company", &booking.company, patch.company.as_ref());
        push_change(
            &mut changes,
            "saleOwner",
            &booking.sale_owner,
            patch.sale_owner.as_ref(),
        );
        push_change(&mut changes, "phone", &booking.phone, patch.phone.as_ref());
        push_change(&mut changes, "email", &booking.email, patch.email.as_ref());
        push_change(&mut changes, "checkIn", &booking.check_in, patch.check_in.as_ref());
        push_change(
            &mut changes,
            "checkOut",
            &booking.check_out,
            patch.check_out.as_ref(),
        );
        push_change(
            &mut changes,
            "roomType",
            &booking.room_type,
            patch.room_type.as_ref(),
        );
        push_change(
            &mut changes,
            "numberOfRooms",
            &booking.number_of_rooms,
            patch.number_of_rooms.as_ref(),
        );
        push_change(&mut changes, "rate", &booking.rate, patch.rate.as_ref());
        push_change(
            &mut changes,
            "paymentMethod",
            &booking.payment_method,
            patch.payment_method.as_ref(),
        );
        let notes_after = patch.notes.clone().map(Some);
        push_change(&mut changes, "notes", &booking.notes, notes_after.as_ref());
        changes
    }

    fn guard_not_terminal(booking: &entity::booking::Model, verb: &str) -> Result<(), AppError> {
        if booking.status.is_terminal() {
            return Err(BookingError::InvalidState(format!(
                "Cannot {verb} a {} booking",
                match booking.status {
                    BookingStatus::Cancelled => "cancelled",
                    _ => "voided",
                }
            ))
            .into());
        }
        Ok(())
    }

    fn validate_required(fields: &[(&str, &str)]) -> Result<(), AppError> {
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(BookingError::Validation(format!("{name} is required")).into());
            }
        }
        Ok(())
    }

    fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), AppError> {
        if check_out <= check_in {
            return Err(
                BookingError::Validation("checkOut must be after checkIn".to_string()).into(),
            );
        }
        Ok(())
    }

    fn validate_rooms(number_of_rooms: i32) -> Result<(), AppError> {
        if number_of_rooms < 1 {
            return Err(
                BookingError::Validation("numberOfRooms must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    fn validate_rate(rate: f64) -> Result<(), AppError> {
        if rate < 0.0 || !rate.is_finite() {
            return Err(BookingError::Validation("rate must not be negative".to_string()).into());
        }
        Ok(())
    }
}

fn push_change<T>(changes: &mut Vec<FieldChange>, field: &str, before: &T, after: Option<&T>)
where
    T: PartialEq + serde::Serialize,
{
    if let Some(after) = after {
        if after != before {
            changes.push(FieldChange {
                field: field.to_string(),
                before: serde_json::to_value(before).unwrap_or(serde_json::Value::Null),
                after: serde_json::to_value(after).unwrap_or(serde_json::Value::Null),
            });
        }
    }
}

/// The stay a booking would have after a patch is applied. Used to decide
/// whether inventory must be re-checked and with which values.
struct EffectiveStay {
    check_in: NaiveDate,
    check_out: NaiveDate,
    room_type: String,
    number_of_rooms: i32,
    booking_id: i32,
    dates_changed: bool,
    inventory_changed: bool,
}

impl EffectiveStay {
    fn of(booking: &entity::booking::Model, patch: &BookingPatch) -> Self {
        let check_in = patch.check_in.unwrap_or(booking.check_in);
        let check_out = patch.check_out.unwrap_or(booking.check_out);
        let room_type = patch
            .room_type
            .clone()
            .unwrap_or_else(|| booking.room_type.clone());
        let number_of_rooms = patch.number_of_rooms.unwrap_or(booking.number_of_rooms);
        let dates_changed = check_in != booking.check_in || check_out != booking.check_out;
        let inventory_changed = dates_changed
            || room_type != booking.room_type
            || number_of_rooms != booking.number_of_rooms;
        Self {
            check_in,
            check_out,
            room_type,
            number_of_rooms,
            booking_id: booking.id,
            dates_changed,
            inventory_changed,
        }
    }

    fn validate(&self, patch: &BookingPatch) -> Result<(), AppError> {
        BookingService::validate_stay(self.check_in, self.check_out)?;
        BookingService::validate_rooms(self.number_of_rooms)?;
        if let Some(rate) = patch.rate {
            BookingService::validate_rate(rate)?;
        }
        Ok(())
    }

    /// Re-checks availability (excluding this booking's own held rooms)
    /// when the patch moved any inventory-relevant field, and re-validates
    /// blackout and minimum-stay rules when the dates moved.
    async fn recheck_if_changed<C: ConnectionTrait>(&self, db: &C) -> Result<(), AppError> {
        if !self.inventory_changed {
            return Ok(());
        }
        let available = AvailabilityService::new(db)
            .compute(
                self.check_in,
                self.check_out,
                &self.room_type,
                Some(self.booking_id),
            )
            .await?;
        if available < i64::from(self.number_of_rooms) {
            return Err(BookingError::InsufficientAvailability {
                available,
                requested: self.number_of_rooms,
            }
            .into());
        }
        if self.dates_changed {
            let constraints = ConstraintService::new(db);
            let blackouts = constraints
                .blackout_dates_within(self.check_in, self.check_out)
                .await?;
            if !blackouts.is_empty() {
                return Err(BookingError::BlackoutViolation { dates: blackouts }.into());
            }
            if let Some((required, actual)) = constraints
                .minimum_stay_violation(self.check_in, self.check_out)
                .await?
            {
                return Err(BookingError::MinimumStayViolation { required, actual }.into());
            }
        }
        Ok(())
    }
}
