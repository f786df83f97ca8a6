use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::activity_log::ActivityLogQuery;

/// Repository for the admin activity feed.
pub struct ActivityLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records one admin action.
    pub async fn record(
        &self,
        user_name: &str,
        action: &str,
        details: Option<String>,
    ) -> Result<entity::activity_log::Model, DbErr> {
        entity::activity_log::ActiveModel {
            id: ActiveValue::NotSet,
            user_name: ActiveValue::Set(user_name.to_string()),
            action: ActiveValue::Set(action.to_string()),
            details: ActiveValue::Set(details),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a page of activity logs matching the query, newest first.
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))`: The page plus the total match count
    /// - `Err(DbErr)`: Database error
    pub async fn list(
        &self,
        query: &ActivityLogQuery,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::activity_log::Model>, u64), DbErr> {
        let mut select = entity::prelude::ActivityLog::find();
        if let Some(action) = &query.action {
            select = select.filter(entity::activity_log::Column::Action.contains(action));
        }
        if let Some(start) = query.start_date {
            let bound = start.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
            select = select.filter(entity::activity_log::Column::CreatedAt.gte(bound));
        }
        if let Some(end) = query.end_date {
            let bound = end.and_hms_opt(23, 59, 59).unwrap_or_default().and_utc();
            select = select.filter(entity::activity_log::Column::CreatedAt.lte(bound));
        }
        let paginator = select
            .order_by_desc(entity::activity_log::Column::CreatedAt)
            .order_by_desc(entity::activity_log::Column::Id)
            .paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((items, total))
    }

    /// Counts actions recorded at or after `since`.
    pub async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::ActivityLog::find()
            .filter(entity::activity_log::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }
}
