use autobook_core::{
    errors::BookingResult,
    models::appointment::{Appointment, AppointmentRequest},
};
use mockall::mock;

use crate::scheduler::AppointmentService;

// Mock scheduler for exercising callers without booking rules
mock! {
    pub AppointmentService {}

    impl AppointmentService for AppointmentService {
        fn schedule(&self, request: AppointmentRequest) -> BookingResult<Appointment>;

        fn list_all(&self) -> Vec<Appointment>;
    }
}
