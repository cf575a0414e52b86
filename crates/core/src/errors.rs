use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single structural problem with a request, addressed by a dotted field path
/// such as `customer.email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid date time: {0}")]
    InvalidDateTime(String),

    #[error("Appointment is outside of business hours")]
    OutsideBusinessHours,

    #[error("Appointment conflicts with an existing appointment")]
    SchedulingConflict,

    #[error("Validation error: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type BookingResult<T> = Result<T, BookingError>;
