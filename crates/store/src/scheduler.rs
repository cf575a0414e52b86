//! # Scheduler
//!
//! Decides whether a request can be booked and commits it to the store.
//!
//! ## Booking Steps
//!
//! 1. Parse the request into a candidate appointment and derive its absolute
//!    `[start, end)` interval
//! 2. Reject it if it does not fit the business window of its start day
//! 3. Take the store lock and reject it if it overlaps any stored appointment
//! 4. Append the new appointment before releasing the lock
//!
//! Steps 3 and 4 form one critical section, so two concurrent requests for the
//! same slot cannot both observe a free store. A failed request never touches
//! the store.

use autobook_core::{
    business_hours::BusinessHours,
    conflict::find_conflict,
    errors::{BookingError, BookingResult},
    models::appointment::{Appointment, AppointmentRequest},
};
use tracing::{debug, info};

use crate::SharedStore;

/// Booking operations the HTTP layer depends on.
pub trait AppointmentService: Send + Sync {
    /// Books `request`, returning the stored appointment with its generated id.
    ///
    /// # Errors
    ///
    /// * `BookingError::InvalidDateTime` - start time is not an RFC 3339 timestamp
    /// * `BookingError::InvalidTimeZone` - zone identifier does not resolve
    /// * `BookingError::OutsideBusinessHours` - interval leaves the local window
    /// * `BookingError::SchedulingConflict` - interval overlaps a stored booking
    fn schedule(&self, request: AppointmentRequest) -> BookingResult<Appointment>;

    /// Every booked appointment in insertion order.
    fn list_all(&self) -> Vec<Appointment>;
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    store: SharedStore,
    hours: BusinessHours,
}

impl Scheduler {
    pub fn new(store: SharedStore) -> Self {
        Self::with_business_hours(store, BusinessHours::default())
    }

    pub fn with_business_hours(store: SharedStore, hours: BusinessHours) -> Self {
        Self { store, hours }
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.hours
    }
}

impl AppointmentService for Scheduler {
    fn schedule(&self, request: AppointmentRequest) -> BookingResult<Appointment> {
        let appointment = Appointment::book(request)?;
        let interval = appointment.interval();

        if !self.hours.contains(&interval) {
            debug!(
                start = %interval.start,
                end = %interval.end,
                time_zone = %interval.time_zone,
                "Rejected appointment outside business hours"
            );
            return Err(BookingError::OutsideBusinessHours);
        }

        let mut store = self.store.lock();
        if let Some(existing) = find_conflict(&interval, store.appointments()) {
            debug!(
                start = %interval.start,
                end = %interval.end,
                conflicting_id = %existing.id,
                "Rejected appointment overlapping an existing booking"
            );
            return Err(BookingError::SchedulingConflict);
        }
        store.insert(appointment.clone());
        drop(store);

        info!(
            id = %appointment.id,
            start = %interval.start,
            duration = appointment.appointment_duration,
            "Booked appointment"
        );

        Ok(appointment)
    }

    fn list_all(&self) -> Vec<Appointment> {
        self.store.all()
    }
}
