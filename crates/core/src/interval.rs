//! Conversion of an appointment's wall-clock description into absolute instants.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use chrono_tz::Tz;

use crate::errors::{BookingError, BookingResult};

/// A half-open `[start, end)` span of absolute time, carrying the zone whose
/// local calendar governs business hours for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub time_zone: Tz,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, duration_minutes: u32, time_zone: Tz) -> Self {
        Self {
            start,
            end: start + Duration::minutes(i64::from(duration_minutes)),
            time_zone,
        }
    }

    /// Strict overlap test. Intervals that only touch end-to-start do not overlap,
    /// while intervals sharing a start or an end do.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Resolves an IANA (or named POSIX, e.g. `EST5EDT`) zone identifier.
pub fn parse_time_zone(time_zone: &str) -> BookingResult<Tz> {
    time_zone
        .parse::<Tz>()
        .map_err(|_| BookingError::InvalidTimeZone(time_zone.to_string()))
}

/// Parses an RFC 3339 timestamp with an explicit offset.
pub fn parse_date_time(date_time: &str) -> BookingResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date_time)
        .map_err(|e| BookingError::InvalidDateTime(format!("{date_time} ({e})")))
}

/// Builds the interval an appointment occupies.
///
/// The date-time is checked before the zone, so a request that is wrong on both
/// counts reports `InvalidDateTime`.
pub fn to_interval(
    appointment_date_time: &str,
    duration_minutes: u32,
    time_zone: &str,
) -> BookingResult<TimeInterval> {
    let start = parse_date_time(appointment_date_time)?.with_timezone(&Utc);
    let zone = parse_time_zone(time_zone)?;

    Ok(TimeInterval::new(start, duration_minutes, zone))
}
