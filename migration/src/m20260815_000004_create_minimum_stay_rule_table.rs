use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MinimumStayRule::Table)
                    .if_not_exists()
                    .col(pk_auto(MinimumStayRule::Id))
                    .col(date(MinimumStayRule::StartDate))
                    .col(date(MinimumStayRule::EndDate))
                    .col(integer(MinimumStayRule::MinNights))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MinimumStayRule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MinimumStayRule {
    Table,
    Id,
    StartDate,
    EndDate,
    MinNights,
}
