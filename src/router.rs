use axum::{
    routing::{get, post},
    Router,
};

use crate::{controller, state::AppState};

/// Builds the API route table.
///
/// Booking routes accept either a numeric id or a booking code in the
/// `{id}` segment.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(controller::health))
        .route(
            "/api/bookings",
            post(controller::booking::create_booking).get(controller::booking::list_bookings),
        )
        .route(
            "/api/bookings/check-availability",
            post(controller::booking::check_availability),
        )
        .route(
            "/api/bookings/{id}",
            get(controller::booking::get_booking)
                .patch(controller::booking::update_booking)
                .delete(controller::booking::delete_booking),
        )
        .route(
            "/api/bookings/{id}/confirm",
            post(controller::booking::confirm_booking),
        )
        .route(
            "/api/bookings/{id}/cancel",
            post(controller::booking::cancel_booking),
        )
        .route(
            "/api/bookings/{id}/amend",
            post(controller::booking::amend_booking),
        )
        .route("/api/logs", get(controller::log::list_logs))
        .route("/api/logs/stats", get(controller::log::log_stats))
        .route(
            "/api/users",
            get(controller::user::list_users).post(controller::user::create_user),
        )
        .route(
            "/api/users/{id}",
            get(controller::user::get_user).patch(controller::user::update_user),
        )
}
