//! HTTP request handlers.
//!
//! Controllers translate between the wire and the service layer: extract
//! inputs, call the service, record the admin activity once the operation
//! succeeded, and shape the response.

pub mod booking;
pub mod log;
pub mod user;

use axum::Json;
use chrono::Utc;

use crate::model::api::HealthDto;

/// Liveness probe.
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
