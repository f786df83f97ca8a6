use crate::{data::activity_log::ActivityLogRepository, model::activity_log::ActivityLogQuery};
use chrono::{Duration, Utc};
use entity::prelude::ActivityLog;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;


fn query() -> ActivityLogQuery {
    ActivityLogQuery {
        action: None,
        start_date: None,
        end_date: None,
        page: 1,
        limit: 20,
    }
}
