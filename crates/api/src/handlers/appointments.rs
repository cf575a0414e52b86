//! # Appointment Handlers
//!
//! Request processing for booking and listing appointments. The handlers only
//! check the request shape and translate results; every booking decision is
//! made by the [`AppointmentService`](autobook_store::AppointmentService) held in
//! the shared state.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use autobook_core::{
    models::appointment::{Appointment, AppointmentRequest},
    validation::validate_request,
};
use std::sync::Arc;
use tracing::debug;

use crate::{ApiState, middleware::error_handling::AppError};

/// Books a new appointment
///
/// # Endpoint
///
/// ```text
/// POST /appointments
/// ```
///
/// # Returns
///
/// * `201 Created` with the stored appointment, including its generated `id`
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, missing or invalid fields, bad date-time or zone
/// * `409 Conflict` - the slot overlaps an existing appointment
/// * `422 Unprocessable Entity` - the slot is outside business hours
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<AppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let Json(request) = payload?;

    validate_request(&request)
        .inspect_err(|e| debug!(error = %e, "Rejected invalid appointment request"))?;

    let appointment = state.scheduler.schedule(request)?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Lists every booked appointment in booking order
///
/// # Endpoint
///
/// ```text
/// GET /appointments
/// ```
#[axum::debug_handler]
pub async fn list_appointments(State(state): State<Arc<ApiState>>) -> Json<Vec<Appointment>> {
    Json(state.scheduler.list_all())
}
