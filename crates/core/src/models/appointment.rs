use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    errors::BookingResult,
    interval::{TimeInterval, parse_date_time, parse_time_zone},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 5, message = "Valid phone number is required"))]
    pub phone: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[validate(length(min = 1, message = "Address line 1 is required"))]
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[validate(length(min = 1, message = "Zip code is required"))]
    pub zip_code: String,
    #[validate(length(equal = 2, message = "State should be the two letter abbreviation"))]
    pub state: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[validate(length(min = 1, message = "VIN is required"))]
    pub vin: String,
}

/// Everything a caller supplies to book an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// RFC 3339 timestamp with an explicit offset, e.g. `2025-01-01T14:00:00Z`
    #[validate(custom(function = "validate_date_time"))]
    pub appointment_date_time: String,
    #[validate(custom(function = "validate_time_zone"))]
    pub time_zone: String,
    #[validate(range(min = 1, message = "Duration must be greater than 0"))]
    pub appointment_duration: u32,
    #[validate(nested)]
    pub customer: Customer,
    #[validate(nested)]
    pub location: Location,
    #[validate(nested)]
    pub vehicle: Vehicle,
}

fn validate_date_time(date_time: &str) -> Result<(), ValidationError> {
    parse_date_time(date_time).map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("date_time");
        error.message = Some(Cow::Borrowed(
            "Must be an ISO 8601 date time with an offset (e.g. 2025-01-01T14:00:00Z)",
        ));
        error
    })
}

fn validate_time_zone(time_zone: &str) -> Result<(), ValidationError> {
    parse_time_zone(time_zone).map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("time_zone");
        error.message = Some(Cow::Borrowed(
            "Invalid time zone -- Must be a valid IANA or POSIX time zone (e.g. America/New_York or EST5EDT)",
        ));
        error
    })
}

/// A booked appointment, never modified once stored.
///
/// [`Appointment::book`] only parses a request; it checks neither business
/// hours nor overlaps. The store only ever receives appointments that passed
/// both checks in the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub appointment_date_time: DateTime<FixedOffset>,
    pub time_zone: Tz,
    pub appointment_duration: u32,
    pub customer: Customer,
    pub location: Location,
    pub vehicle: Vehicle,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Turns a request into an appointment with a fresh id, keeping the offset the
    /// caller wrote the start time in.
    ///
    /// The date-time is checked before the zone, matching
    /// [`to_interval`](crate::interval::to_interval).
    pub fn book(request: AppointmentRequest) -> BookingResult<Self> {
        let appointment_date_time = parse_date_time(&request.appointment_date_time)?;
        let time_zone = parse_time_zone(&request.time_zone)?;

        Ok(Self {
            id: Uuid::new_v4(),
            appointment_date_time,
            time_zone,
            appointment_duration: request.appointment_duration,
            customer: request.customer,
            location: request.location,
            vehicle: request.vehicle,
            created_at: Utc::now(),
        })
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(
            self.appointment_date_time.with_timezone(&Utc),
            self.appointment_duration,
            self.time_zone,
        )
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.interval().start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.interval().end
    }
}
