//! Overlap detection between a requested interval and existing bookings.
//!
//! Intervals are half-open, so a booking that starts exactly when another ends
//! is allowed, while bookings sharing a start or an end instant collide.

use crate::{interval::TimeInterval, models::appointment::Appointment};

/// Returns the first existing appointment that overlaps `candidate`.
pub fn find_conflict<'a, I>(candidate: &TimeInterval, existing: I) -> Option<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    existing
        .into_iter()
        .find(|appointment| candidate.overlaps(&appointment.interval()))
}

pub fn conflicts<'a, I>(candidate: &TimeInterval, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Appointment>,
{
    find_conflict(candidate, existing).is_some()
}
