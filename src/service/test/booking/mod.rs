use crate::{
    error::{booking::BookingError, AppError},
    model::booking::{
        AmendBookingDto, BookingFilter, BookingPatch, CancelBookingDto, CheckAvailabilityDto,
        CreateBookingDto,
    },
    service::booking::BookingService,
};
use chrono::NaiveDate;
use entity::booking::BookingStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod amend;
mod concurrency;
mod confirm;
mod create;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A valid create request for the given room type and stay, with contact
/// details filled in.
fn create_dto(
    room_type: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    number_of_rooms: i32,
) -> CreateBookingDto {
    CreateBookingDto {
        customer_name: "Somchai J.".to_string(),
        company: "Acme Travel".to_string(),
        sale_owner: "Nok".to_string(),
        phone: "081-234-5678".to_string(),
        email: "somchai@example.com".to_string(),
        check_in,
        check_out,
        room_type: room_type.to_string(),
        number_of_rooms,
        rate: 2500.0,
        payment_method: "Credit Card".to_string(),
        documents: vec![],
        notes: None,
    }
}
