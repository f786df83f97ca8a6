use crate::{
    error::{booking::BookingError, AppError},
    service::availability::AvailabilityService,
};
use chrono::NaiveDate;
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
