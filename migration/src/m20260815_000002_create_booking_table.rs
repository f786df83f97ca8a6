use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_uniq(Booking::Code))
                    .col(string(Booking::CustomerName))
                    .col(string(Booking::Company))
                    .col(string(Booking::SaleOwner))
                    .col(string(Booking::Phone))
                    .col(string(Booking::Email))
                    .col(date(Booking::CheckIn))
                    .col(date(Booking::CheckOut))
                    // Display-name reference into room_type.name, kept as a
                    // plain string for API compatibility.
                    .col(string(Booking::RoomType))
                    .col(integer(Booking::NumberOfRooms))
                    .col(double(Booking::Rate))
                    .col(string(Booking::PaymentMethod))
                    .col(string_len(Booking::Status, 16))
                    .col(timestamp_null(Booking::HoldExpiry))
                    .col(json_null(Booking::Documents))
                    .col(text_null(Booking::Notes))
                    .col(text_null(Booking::CancelReason))
                    .col(json_null(Booking::CancelDocuments))
                    .col(timestamp_null(Booking::CancelledAt))
                    .col(string_null(Booking::CancelledBy))
                    .col(json_null(Booking::AmendmentLogs))
                    .col(timestamp_null(Booking::LastAmendedAt))
                    .col(string_null(Booking::LastAmendedBy))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability queries scan by room type and date range.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_type_dates")
                    .table(Booking::Table)
                    .col(Booking::RoomType)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    Code,
    CustomerName,
    Company,
    SaleOwner,
    Phone,
    Email,
    CheckIn,
    CheckOut,
    RoomType,
    NumberOfRooms,
    Rate,
    PaymentMethod,
    Status,
    HoldExpiry,
    Documents,
    Notes,
    CancelReason,
    CancelDocuments,
    CancelledAt,
    CancelledBy,
    AmendmentLogs,
    LastAmendedAt,
    LastAmendedBy,
    CreatedAt,
}
