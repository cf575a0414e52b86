//! In-memory, append-only appointment storage.

use std::sync::{Mutex, MutexGuard, PoisonError};

use autobook_core::models::appointment::Appointment;

#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Mutex<Vec<Appointment>>,
}

/// Exclusive access to the store for a read-decide-append sequence.
pub struct StoreGuard<'a> {
    appointments: MutexGuard<'a, Vec<Appointment>>,
}

impl StoreGuard<'_> {
    /// Stored appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn insert(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the store lock. Appending is the only mutation, so a lock poisoned by
    /// a panicking holder still guards a consistent list and is recovered.
    pub fn lock(&self) -> StoreGuard<'_> {
        StoreGuard {
            appointments: self
                .appointments
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub fn insert(&self, appointment: Appointment) {
        self.lock().insert(appointment);
    }

    /// Snapshot of every stored appointment in insertion order.
    pub fn all(&self) -> Vec<Appointment> {
        self.lock().appointments().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().appointments().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
