use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for blackout reference data.
pub struct BlackoutDateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlackoutDateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets blackout dates falling within `[from, to]`, both ends
    /// inclusive, ordered by date.
    ///
    /// The inclusive upper bound is deliberate: a blackout on the check-out
    /// date itself blocks the stay.
    pub async fn within_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<entity::blackout_date::Model>, DbErr> {
        entity::prelude::BlackoutDate::find()
            .filter(entity::blackout_date::Column::Date.gte(from))
            .filter(entity::blackout_date::Column::Date.lte(to))
            .order_by_asc(entity::blackout_date::Column::Date)
            .all(self.db)
            .await
    }

    /// Counts blackout rows. Used by startup seeding.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::BlackoutDate::find().count(self.db).await
    }

    /// Creates a blackout date.
    pub async fn create(
        &self,
        date: NaiveDate,
        reason: String,
    ) -> Result<entity::blackout_date::Model, DbErr> {
        entity::blackout_date::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(date),
            reason: ActiveValue::Set(reason),
        }
        .insert(self.db)
        .await
    }
}
