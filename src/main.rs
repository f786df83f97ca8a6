//! Roomboard — hotel booking administration backend.
//!
//! A REST API over a relational store whose core is the booking
//! availability and lifecycle engine: per-night availability computation,
//! blackout and minimum-stay constraint validation, and the booking state
//! machine (PENDING → CONFIRMED → CANCELLED/VOID) with an append-only
//! amendment audit trail.
//!
//! # Architecture
//!
//! The backend follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic: availability, constraints, lifecycle
//! - **Data Layer** (`data/`) - SeaORM repositories, generic over pool or transaction
//! - **Model Layer** (`model/`) - Wire DTOs and operation-specific patch/filter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure: `config`
//! (environment-based configuration), `state` (shared application state),
//! `startup` (database connection, migration, reference-data seeding),
//! and `router` (Axum route configuration).

mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    startup::run(config).await
}
