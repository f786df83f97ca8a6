use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::activity_log::ActivityLogRepository,
    error::AppError,
    model::{
        api::MessageDto,
        booking::{
            AmendBookingDto, AvailabilityDto, BookingDto, BookingPatch, CancelBookingDto,
            CheckAvailabilityDto, CreateBookingDto, ListBookingsQuery, PaginatedBookingsDto,
        },
    },
    service::booking::BookingService,
    state::AppState,
};

/// `POST /api/bookings`
pub async fn create_booking(
    State(state): State<AppState>,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = dto.sale_owner.clone();
    let booking = BookingService::new(&state.db).create(dto).await?;
    ActivityLogRepository::new(&state.db)
        .record(
            &actor,
            "BOOKING_CREATE",
            Some(format!("Created booking {}", booking.code)),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// `GET /api/bookings`
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<PaginatedBookingsDto>, AppError> {
    let page = BookingService::new(&state.db)
        .list(&query.filter(), query.page, query.limit)
        .await?;
    Ok(Json(page))
}

/// `GET /api/bookings/{id}` — accepts a numeric id or a booking code.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingDto>, AppError> {
    let booking = BookingService::new(&state.db).get(&reference).await?;
    Ok(Json(booking))
}

/// `PATCH /api/bookings/{id}` — non-audited field update.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<BookingDto>, AppError> {
    let booking = BookingService::new(&state.db)
        .update(&reference, patch)
        .await?;
    ActivityLogRepository::new(&state.db)
        .record(
            "system",
            "BOOKING_UPDATE",
            Some(format!("Updated booking {}", booking.code)),
        )
        .await?;
    Ok(Json(booking))
}

/// `POST /api/bookings/{id}/amend` — audited field update.
pub async fn amend_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Json(dto): Json<AmendBookingDto>,
) -> Result<Json<BookingDto>, AppError> {
    let actor = dto.amended_by.clone();
    let booking = BookingService::new(&state.db).amend(&reference, dto).await?;
    ActivityLogRepository::new(&state.db)
        .record(
            &actor,
            "BOOKING_AMEND",
            Some(format!("Amended booking {}", booking.code)),
        )
        .await?;
    Ok(Json(booking))
}

/// `POST /api/bookings/{id}/confirm`
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingDto>, AppError> {
    let booking = BookingService::new(&state.db).confirm(&reference).await?;
    ActivityLogRepository::new(&state.db)
        .record(
            "system",
            "BOOKING_CONFIRM",
            Some(format!("Confirmed booking {}", booking.code)),
        )
        .await?;
    Ok(Json(booking))
}

/// `POST /api/bookings/{id}/cancel`
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Json(dto): Json<CancelBookingDto>,
) -> Result<Json<BookingDto>, AppError> {
    let actor = dto.cancelled_by.clone();
    let booking = BookingService::new(&state.db).cancel(&reference, dto).await?;
    ActivityLogRepository::new(&state.db)
        .record(
            &actor,
            "BOOKING_CANCEL",
            Some(format!("Cancelled booking {}", booking.code)),
        )
        .await?;
    Ok(Json(booking))
}

/// `DELETE /api/bookings/{id}`
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<MessageDto>, AppError> {
    BookingService::new(&state.db).delete(&reference).await?;
    ActivityLogRepository::new(&state.db)
        .record(
            "system",
            "BOOKING_DELETE",
            Some(format!("Deleted booking {reference}")),
        )
        .await?;
    Ok(Json(MessageDto {
        message: "Booking deleted successfully".to_string(),
    }))
}

/// `POST /api/bookings/check-availability`
pub async fn check_availability(
    State(state): State<AppState>,
    Json(dto): Json<CheckAvailabilityDto>,
) -> Result<Json<AvailabilityDto>, AppError> {
    let availability = BookingService::new(&state.db).check_availability(dto).await?;
    Ok(Json(availability))
}
