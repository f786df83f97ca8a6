use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Duration, Utc};

use crate::{
    data::activity_log::ActivityLogRepository,
    error::AppError,
    model::{
        activity_log::{ActivityLogDto, ActivityLogQuery, ActivityStatsDto, PaginatedLogsDto},
        api::PaginationDto,
    },
    state::AppState,
};

/// `GET /api/logs`
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<ActivityLogQuery>,
) -> Result<Json<PaginatedLogsDto>, AppError> {
    let page = query.page.max(1);
    let limit = query.limit.clamp(1, 100);
    let (items, total) = ActivityLogRepository::new(&state.db)
        .list(&query, page, limit)
        .await?;
    Ok(Json(PaginatedLogsDto {
        items: items.into_iter().map(ActivityLogDto::from).collect(),
        pagination: PaginationDto::new(page, limit, total),
    }))
}

/// `GET /api/logs/stats` — activity counters for today and the last week.
pub async fn log_stats(State(state): State<AppState>) -> Result<Json<ActivityStatsDto>, AppError> {
    let repo = ActivityLogRepository::new(&state.db);
    let now = Utc::now();
    let start_of_day = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc();
    let today_activities = repo.count_since(start_of_day).await?;
    let week_activities = repo.count_since(now - Duration::days(7)).await?;
    Ok(Json(ActivityStatsDto {
        today_activities,
        week_activities,
    }))
}
