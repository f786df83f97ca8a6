use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Booking engine errors.
///
/// All variants are recoverable at the request boundary; the lifecycle
/// manager performs every check before writing, so a raised error implies
/// no partial state was persisted.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Malformed or missing input: bad date ordering, non-positive room
    /// count, negative rate. The message is surfaced to the caller verbatim.
    #[error("{0}")]
    Validation(String),

    /// Unknown booking id/code or unknown room type name.
    #[error("{0}")]
    NotFound(String),

    /// Requested more rooms than remain available on the tightest night of
    /// the range.
    #[error("Insufficient rooms available. Only {available} room(s) available.")]
    InsufficientAvailability { available: i64, requested: i32 },

    /// The proposed stay overlaps one or more blackout dates.
    #[error("Cannot book during blackout dates: {}", .dates.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", "))]
    BlackoutViolation { dates: Vec<NaiveDate> },

    /// The proposed stay is shorter than the binding minimum-stay rule.
    #[error("Minimum stay of {required} night(s) required. You selected {actual} night(s).")]
    MinimumStayViolation { required: i32, actual: i64 },

    /// Illegal state transition, e.g. confirming a non-pending booking or
    /// amending a cancelled one.
    #[error("{0}")]
    InvalidState(String),
}

/// Converts booking errors into HTTP responses.
///
/// Validation failures are client errors (400), unknown identifiers map to
/// 404, and business rule rejections (availability, blackout, minimum stay,
/// illegal transitions) map to 409 Conflict. Every response carries the
/// human-readable message from the error display impl.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientAvailability { .. }
            | Self::BlackoutViolation { .. }
            | Self::MinimumStayViolation { .. }
            | Self::InvalidState(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
