use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::api::PaginationDto;

/// One recorded admin action.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogDto {
    pub id: i32,
    pub user_name: String,
    pub action: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::activity_log::Model> for ActivityLogDto {
    fn from(model: entity::activity_log::Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
            action: model.action,
            details: model.details,
            created_at: model.created_at,
        }
    }
}

/// Query string for `GET /api/logs`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogQuery {
    /// Case-insensitive partial match on the action name.
    pub action: Option<String>,
    /// Inclusive lower bound on the log date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the log date.
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

/// Page of activity logs with its pagination envelope.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedLogsDto {
    pub items: Vec<ActivityLogDto>,
    pub pagination: PaginationDto,
}

/// Aggregate counters for `GET /api/logs/stats`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatsDto {
    pub today_activities: u64,
    pub week_activities: u64,
}
