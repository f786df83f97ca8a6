//! Blackout date factory for creating test blackout reference data.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a blackout date with the given date and reason.
///
/// # Arguments
/// - `db` - Database connection
/// - `date` - Calendar date to black out
/// - `reason` - Human-readable reason
///
/// # Returns
/// - `Ok(entity::blackout_date::Model)` - Created blackout date entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blackout_date(
    db: &DatabaseConnection,
    date: NaiveDate,
    reason: impl Into<String>,
) -> Result<entity::blackout_date::Model, DbErr> {
    entity::blackout_date::ActiveModel {
        id: ActiveValue::NotSet,
        date: ActiveValue::Set(date),
        reason: ActiveValue::Set(reason.into()),
    }
    .insert(db)
    .await
}
