pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_room_type_table;
mod m20260815_000002_create_booking_table;
mod m20260815_000003_create_blackout_date_table;
mod m20260815_000004_create_minimum_stay_rule_table;
mod m20260815_000005_create_user_table;
mod m20260815_000006_create_activity_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_room_type_table::Migration),
            Box::new(m20260815_000002_create_booking_table::Migration),
            Box::new(m20260815_000003_create_blackout_date_table::Migration),
            Box::new(m20260815_000004_create_minimum_stay_rule_table::Migration),
            Box::new(m20260815_000005_create_user_table::Migration),
            Box::new(m20260815_000006_create_activity_log_table::Migration),
        ]
    }
}
