//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Autobook API.
//! It maps booking errors to HTTP status codes and JSON error responses, so every
//! handler reports failures in the same shape:
//!
//! ```json
//! { "error": "Validation error: customer.email: Valid email is required",
//!   "details": [{ "field": "customer.email", "message": "Valid email is required" }] }
//! ```
//!
//! `details` is only present for validation failures.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use autobook_core::errors::{BookingError, FieldError};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use autobook_api::middleware::error_handling::AppError;
/// use autobook_core::errors::BookingError;
///
/// async fn handler(slot_free: bool) -> Result<Json<&'static str>, AppError> {
///     if !slot_free {
///         return Err(AppError(BookingError::SchedulingConflict));
///     }
///     Ok(Json("booked"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidTimeZone(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidDateTime(_) => StatusCode::BAD_REQUEST,
            BookingError::OutsideBusinessHours => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::SchedulingConflict => StatusCode::CONFLICT,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let message = self.0.to_string();
        let body = match self.0 {
            BookingError::Validation(details) => Json(json!({ "error": message, "details": details })),
            _ => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Malformed or mistyped JSON bodies are reported as validation failures on the body.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(BookingError::Validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
        )]))
    }
}
