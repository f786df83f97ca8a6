use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DbErr};

use crate::data::{
    blackout_date::BlackoutDateRepository, minimum_stay_rule::MinimumStayRuleRepository,
};

/// Validates stays against blackout dates and minimum-stay rules.
pub struct ConstraintService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConstraintService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the blackout dates the stay touches.
    ///
    /// The check spans `[check_in, check_out]` inclusive on both ends, so
    /// a blackout on the departure date also blocks the stay. An empty
    /// result means the stay is clear.
    pub async fn blackout_dates_within(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DbErr> {
        let blackouts = BlackoutDateRepository::new(self.db)
            .within_range(check_in, check_out)
            .await?;
        Ok(blackouts.into_iter().map(|b| b.date).collect())
    }

    /// Checks the stay against minimum-stay rules.
    ///
    /// Only rules whose window fully contains the stay apply; when several
    /// do, the largest `min_nights` binds. Nights are counted as
    /// `check_out - check_in` in days.
    ///
    /// # Returns
    /// - `Ok(Some((required, actual)))`: The stay is too short
    /// - `Ok(None)`: No applicable rule is violated
    /// - `Err(DbErr)`: Database error
    pub async fn minimum_stay_violation(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Option<(i32, i64)>, DbErr> {
        let rules = MinimumStayRuleRepository::new(self.db)
            .containing_stay(check_in, check_out)
            .await?;
        let Some(required) = rules.iter().map(|r| r.min_nights).max() else {
            return Ok(None);
        };
        let actual = (check_out - check_in).num_days();
        if actual < i64::from(required) {
            Ok(Some((required, actual)))
        } else {
            Ok(None)
        }
    }
}
