use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    data::{
        blackout_date::BlackoutDateRepository, minimum_stay_rule::MinimumStayRuleRepository,
        room_type::RoomTypeRepository,
    },
    error::AppError,
    router,
    state::AppState,
};

/// Connects to the database, applies migrations, seeds reference data,
/// and serves the API until shutdown.
pub async fn run(config: Config) -> Result<(), AppError> {
    let db = Database::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    seed_reference_data(&db).await?;

    let state = AppState::new(db);
    let app = router::router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Seeds room types, blackout dates, and minimum-stay rules on first run.
/// Each table is only touched when empty, so operator edits survive
/// restarts.
async fn seed_reference_data(db: &DatabaseConnection) -> Result<(), AppError> {
    let room_types = RoomTypeRepository::new(db);
    if room_types.count().await? == 0 {
        room_types
            .create("ห้องดีลักซ์".to_string(), "Deluxe Room".to_string(), 20)
            .await?;
        room_types
            .create("ห้องสุพีเรีย".to_string(), "Superior Room".to_string(), 15)
            .await?;
        room_types
            .create("ห้องสวีท".to_string(), "Suite".to_string(), 8)
            .await?;
        room_types
            .create(
                "ห้องเอ็กเซ็กคูทีฟสวีท".to_string(),
                "Executive Suite".to_string(),
                5,
            )
            .await?;
        tracing::info!("Seeded room types");
    }

    let blackouts = BlackoutDateRepository::new(db);
    if blackouts.count().await? == 0 {
        for (date, reason) in [
            (ymd(2025, 12, 24), "Christmas Eve - fully booked for gala"),
            (ymd(2025, 12, 25), "Christmas Day - fully booked for gala"),
            (ymd(2025, 12, 31), "New Year's Eve - private event"),
            (ymd(2026, 1, 1), "New Year's Day - private event"),
        ] {
            blackouts.create(date?, reason.to_string()).await?;
        }
        tracing::info!("Seeded blackout dates");
    }

    let rules = MinimumStayRuleRepository::new(db);
    if rules.count().await? == 0 {
        rules
            .create(ymd(2025, 12, 20)?, ymd(2026, 1, 5)?, 3)
            .await?;
        tracing::info!("Seeded minimum-stay rules");
    }

    Ok(())
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InternalError(format!("Invalid seed date {year}-{month}-{day}")))
}
