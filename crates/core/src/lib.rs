//! # Autobook Core
//!
//! Domain types and scheduling rules for booking vehicle-service appointments.
//!
//! - [`interval`]: turns a start time, duration and zone into absolute instants
//! - [`business_hours`]: checks an interval against the local opening window
//! - [`conflict`]: half-open overlap detection against existing bookings
//! - [`validation`]: structural request checks with field-path errors
//!
//! Nothing here holds state; the store and scheduler live in `autobook-store`.

pub mod business_hours;
pub mod conflict;
pub mod errors;
pub mod interval;
pub mod models;
pub mod validation;
