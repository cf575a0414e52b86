use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/appointments",
        get(handlers::appointments::list_appointments)
            .post(handlers::appointments::create_appointment),
    )
}
