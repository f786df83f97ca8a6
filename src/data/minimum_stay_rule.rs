use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository for minimum-stay reference data.
pub struct MinimumStayRuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MinimumStayRuleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets rules whose `[start_date, end_date]` fully contains the
    /// proposed stay. A rule that only partially overlaps the stay does
    /// not apply.
    pub async fn containing_stay(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<entity::minimum_stay_rule::Model>, DbErr> {
        entity::prelude::MinimumStayRule::find()
            .filter(entity::minimum_stay_rule::Column::StartDate.lte(check_in))
            .filter(entity::minimum_stay_rule::Column::EndDate.gte(check_out))
            .all(self.db)
            .await
    }

    /// Counts rule rows. Used by startup seeding.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::MinimumStayRule::find().count(self.db).await
    }

    /// Creates a minimum-stay rule.
    pub async fn create(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        min_nights: i32,
    ) -> Result<entity::minimum_stay_rule::Model, DbErr> {
        entity::minimum_stay_rule::ActiveModel {
            id: ActiveValue::NotSet,
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            min_nights: ActiveValue::Set(min_nights),
        }
        .insert(self.db)
        .await
    }
}
