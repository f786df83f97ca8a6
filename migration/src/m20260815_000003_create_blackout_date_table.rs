use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlackoutDate::Table)
                    .if_not_exists()
                    .col(pk_auto(BlackoutDate::Id))
                    .col(date_uniq(BlackoutDate::Date))
                    .col(string(BlackoutDate::Reason))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlackoutDate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlackoutDate {
    Table,
    Id,
    Date,
    Reason,
}
