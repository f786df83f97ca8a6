use chrono::{DateTime, NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::booking::{AmendmentLogEntry, BookingFilter, BookingPatch};

/// Column values for a freshly created booking row.
pub struct NewBookingRecord {
    pub code: String,
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
    pub documents: Vec<String>,
    pub notes: Option<String>,
    pub hold_expiry: DateTime<Utc>,
}

/// Repository for booking rows.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new booking in `PENDING` status.
    ///
    /// # Arguments
    /// - `record`: Column values, including the pre-generated unique code
    ///
    /// # Returns
    /// - `Ok(Model)`: The inserted booking
    /// - `Err(DbErr)`: Database error (including code uniqueness violation)
    pub async fn insert(
        &self,
        record: NewBookingRecord,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(record.code),
            customer_name: ActiveValue::Set(record.customer_name),
            company: ActiveValue::Set(record.company),
            sale_owner: ActiveValue::Set(record.sale_owner),
            phone: ActiveValue::Set(record.phone),
            email: ActiveValue::Set(record.email),
            check_in: ActiveValue::Set(record.check_in),
            check_out: ActiveValue::Set(record.check_out),
            room_type: ActiveValue::Set(record.room_type),
            number_of_rooms: ActiveValue::Set(record.number_of_rooms),
            rate: ActiveValue::Set(record.rate),
            payment_method: ActiveValue::Set(record.payment_method),
            status: ActiveValue::Set(BookingStatus::Pending),
            hold_expiry: ActiveValue::Set(Some(record.hold_expiry)),
            documents: ActiveValue::Set(Some(serde_json::json!(record.documents))),
            cancel_documents: ActiveValue::Set(None),
            amendment_logs: ActiveValue::Set(None),
            notes: ActiveValue::Set(record.notes),
            cancel_reason: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            cancelled_by: ActiveValue::Set(None),
            last_amended_at: ActiveValue::Set(None),
            last_amended_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Finds a booking by numeric id or by booking code.
    ///
    /// A reference that parses as an integer matches on the id column as
    /// well; anything else matches on the code column only.
    pub async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let mut condition = Condition::any().add(entity::booking::Column::Code.eq(reference));
        if let Ok(id) = reference.parse::<i32>() {
            condition = condition.add(entity::booking::Column::Id.eq(id));
        }
        entity::prelude::Booking::find()
            .filter(condition)
            .one(self.db)
            .await
    }

    /// Whether a booking with the given code already exists.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Code.eq(code))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Finds inventory-holding bookings of a room type whose stay overlaps
    /// `[check_in, check_out)`.
    ///
    /// Only `PENDING` and `CONFIRMED` bookings hold inventory; cancelled
    /// and voided ones are ignored. Overlap is half-open: a booking that
    /// checks out on `check_in` does not collide.
    ///
    /// # Arguments
    /// - `exclude_id`: Booking to leave out of the result, used when
    ///   re-checking availability for that booking's own modification
    pub async fn find_overlapping(
        &self,
        room_type: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomType.eq(room_type))
            .filter(
                entity::booking::Column::Status
                    .is_in([BookingStatus::Pending, BookingStatus::Confirmed]),
            )
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in));
        if let Some(id) = exclude_id {
            query = query.filter(entity::booking::Column::Id.ne(id));
        }
        query.all(self.db).await
    }

    /// Gets a page of bookings matching the filter, newest first.
    ///
    /// # Arguments
    /// - `filter`: Exact and partial-match criteria, all optional
    /// - `page`: 1-indexed page number
    /// - `limit`: Page size
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))`: The page plus the total match count
    /// - `Err(DbErr)`: Database error
    pub async fn list(
        &self,
        filter: &BookingFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::booking::Model>, u64), DbErr> {
        let mut query = entity::prelude::Booking::find();
        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }
        if let Some(room_type) = &filter.room_type {
            query = query.filter(entity::booking::Column::RoomType.eq(room_type));
        }
        if let Some(sale_owner) = &filter.sale_owner {
            query = query.filter(entity::booking::Column::SaleOwner.eq(sale_owner));
        }
        if let Some(company) = &filter.company {
            query = query.filter(entity::booking::Column::Company.eq(company));
        }
        if let Some(from) = filter.check_in_from {
            query = query.filter(entity::booking::Column::CheckIn.gte(from));
        }
        if let Some(to) = filter.check_in_to {
            query = query.filter(entity::booking::Column::CheckIn.lte(to));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::booking::Column::Code.contains(search))
                    .add(entity::booking::Column::CustomerName.contains(search))
                    .add(entity::booking::Column::Phone.contains(search))
                    .add(entity::booking::Column::Email.contains(search))
                    .add(entity::booking::Column::Company.contains(search)),
            );
        }
        let paginator = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((items, total))
    }

    /// Applies a non-audited patch to a booking and stamps
    /// `last_amended_at`.
    pub async fn update_fields(
        &self,
        booking: entity::booking::Model,
        patch: &BookingPatch,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active = Self::patched(booking, patch);
        active.last_amended_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await
    }

    /// Applies an audited patch: same field updates as `update_fields`,
    /// plus one entry appended to the amendment trail and the amendment
    /// stamps set from the entry.
    pub async fn amend_fields(
        &self,
        booking: entity::booking::Model,
        patch: &BookingPatch,
        entry: AmendmentLogEntry,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut trail: Vec<AmendmentLogEntry> = booking
            .amendment_logs
            .clone()
            .map(|logs| serde_json::from_value(logs).unwrap_or_default())
            .unwrap_or_default();
        let mut active = Self::patched(booking, patch);
        active.last_amended_at = ActiveValue::Set(Some(entry.timestamp));
        active.last_amended_by = ActiveValue::Set(Some(entry.amended_by.clone()));
        trail.push(entry);
        active.amendment_logs = ActiveValue::Set(Some(serde_json::json!(trail)));
        active.update(self.db).await
    }

    /// Confirms a pending booking: status becomes `CONFIRMED` and the
    /// hold expiry is cleared.
    pub async fn confirm(
        &self,
        booking: entity::booking::Model,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active = booking.into_active_model();
        active.status = ActiveValue::Set(BookingStatus::Confirmed);
        active.hold_expiry = ActiveValue::Set(None);
        active.update(self.db).await
    }

    /// Records a cancellation: releases the hold and stamps the
    /// cancellation fields.
    ///
    /// # Arguments
    /// - `status`: `VOID` for a never-confirmed booking, `CANCELLED`
    ///   otherwise; the caller decides
    pub async fn cancel(
        &self,
        booking: entity::booking::Model,
        status: BookingStatus,
        reason: String,
        documents: Vec<String>,
        cancelled_by: String,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active = booking.into_active_model();
        active.status = ActiveValue::Set(status);
        active.hold_expiry = ActiveValue::Set(None);
        active.cancel_reason = ActiveValue::Set(Some(reason));
        active.cancel_documents = ActiveValue::Set(Some(serde_json::json!(documents)));
        active.cancelled_at = ActiveValue::Set(Some(Utc::now()));
        active.cancelled_by = ActiveValue::Set(Some(cancelled_by));
        active.update(self.db).await
    }

    /// Deletes a booking row outright.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    fn patched(
        booking: entity::booking::Model,
        patch: &BookingPatch,
    ) -> entity::booking::ActiveModel {
        let mut active = booking.into_active_model();
        if let Some(customer_name) = &patch.customer_name {
            active.customer_name = ActiveValue::Set(customer_name.clone());
        }
        if let Some(company) = &patch.company {
            active.company = ActiveValue::Set(company.clone());
        }
        if let Some(sale_owner) = &patch.sale_owner {
            active.sale_owner = ActiveValue::Set(sale_owner.clone());
        }
        if let Some(phone) = &patch.phone {
            active.phone = ActiveValue::Set(phone.clone());
        }
        if let Some(email) = &patch.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(check_in) = patch.check_in {
            active.check_in = ActiveValue::Set(check_in);
        }
        if let Some(check_out) = patch.check_out {
            active.check_out = ActiveValue::Set(check_out);
        }
        if let Some(room_type) = &patch.room_type {
            active.room_type = ActiveValue::Set(room_type.clone());
        }
        if let Some(number_of_rooms) = patch.number_of_rooms {
            active.number_of_rooms = ActiveValue::Set(number_of_rooms);
        }
        if let Some(rate) = patch.rate {
            active.rate = ActiveValue::Set(rate);
        }
        if let Some(payment_method) = &patch.payment_method {
            active.payment_method = ActiveValue::Set(payment_method.clone());
        }
        if let Some(notes) = &patch.notes {
            active.notes = ActiveValue::Set(Some(notes.clone()));
        }
        active
    }
}
