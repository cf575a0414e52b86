pub mod scheduler;
pub mod store;

pub mod mock;

use std::sync::Arc;

pub use scheduler::{AppointmentService, Scheduler};
pub use store::AppointmentStore;

pub type SharedStore = Arc<AppointmentStore>;

/// Creates the empty, process-wide store that the scheduler is built on.
pub fn create_store() -> SharedStore {
    Arc::new(AppointmentStore::new())
}
