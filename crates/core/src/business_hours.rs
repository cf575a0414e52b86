//! # Business Hours
//!
//! Appointments must fit inside the shop's local opening window. The window is
//! always taken from the local calendar day on which the appointment *starts*:
//! an appointment that starts at 16:45 and runs past 17:00 is rejected, and one
//! that runs past local midnight is never evaluated against the next day.
//!
//! Boundaries are computed in the appointment's zone and converted back to
//! absolute instants before comparing, so DST transitions shift the window in
//! UTC terms while keeping it at 09:00-17:00 on the wall clock.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    errors::{BookingError, BookingResult, FieldError},
    interval::TimeInterval,
};

/// Daily opening window in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            close: NaiveTime::from_hms_opt(17, 0, 0).expect("17:00 is a valid time"),
        }
    }
}

impl BusinessHours {
    /// Creates a window, rejecting one that does not open before it closes.
    pub fn new(open: NaiveTime, close: NaiveTime) -> BookingResult<Self> {
        if open >= close {
            return Err(BookingError::Validation(vec![FieldError::new(
                "businessHours",
                format!("opening time {open} must be before closing time {close}"),
            )]));
        }

        Ok(Self { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Returns the absolute `(open, close)` instants of the window on the local
    /// day containing `instant`.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    /// `None` means a boundary falls in a DST gap and does not exist that day.
    pub fn window_on(&self, instant: DateTime<Utc>, zone: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let local_day = instant.with_timezone(&zone).date_naive();

        let open = local_boundary(local_day, self.open, zone)?;
        let close = local_boundary(local_day, self.close, zone)?;

        Some((open, close))
    }

    pub fn contains(&self, interval: &TimeInterval) -> bool {
        self.is_within(interval.start, interval.end, interval.time_zone)
    }

    pub fn is_within(&self, start: DateTime<Utc>, end: DateTime<Utc>, zone: Tz) -> bool {
        match self.window_on(start, zone) {
            Some((open, close)) => start >= open && end <= close,
            None => false,
        }
    }
}

fn local_boundary(day: NaiveDate, time: NaiveTime, zone: Tz) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&day.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Checks `[start, end)` against the default 09:00-17:00 window of the start day.
pub fn is_within_working_hours(start: DateTime<Utc>, end: DateTime<Utc>, zone: Tz) -> bool {
    BusinessHours::default().is_within(start, end, zone)
}
