//! Minimum stay rule factory for creating test stay constraints.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a minimum stay rule covering the given date range.
///
/// # Arguments
/// - `db` - Database connection
/// - `start_date` - First date the rule covers
/// - `end_date` - Last date the rule covers
/// - `min_nights` - Minimum nights required for stays contained in the range
///
/// # Returns
/// - `Ok(entity::minimum_stay_rule::Model)` - Created rule entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_minimum_stay_rule(
    db: &DatabaseConnection,
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
    .insert(db)
    .await
}
