//! # Autobook API
//!
//! The API crate provides the web server for the Autobook vehicle-service booking
//! service. It exposes endpoints for booking appointments and listing bookings.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Check request shape and call the scheduler
//! - **Middleware**: Map booking errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Booking rules and storage live in
//! `autobook-core` and `autobook-store`.

/// Configuration module for API settings
pub mod config;
/// Request handlers for the appointment endpoints
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use autobook_store::AppointmentService;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use autobook_api::ApiState;
/// use autobook_store::{Scheduler, create_store};
///
/// let state = Arc::new(ApiState {
///     scheduler: Arc::new(Scheduler::new(create_store())),
/// });
/// ```
pub struct ApiState {
    /// Booking service that owns the appointment store
    pub scheduler: Arc<dyn AppointmentService>,
}

/// Builds the application router with all routes and layers attached
///
/// # Errors
///
/// Returns an error if a configured CORS origin is not a valid header value.
pub fn build_router(config: &config::ApiConfig, state: Arc<ApiState>) -> Result<Router> {
    let app = Router::new()
        // Status and health check endpoints
        .merge(routes::health::routes())
        // Appointment booking endpoints
        .merge(routes::appointments::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    Ok(app)
}

/// Starts the API server with the provided configuration and booking service
///
/// This function initializes logging, configures routes, and serves HTTP until
/// the process is stopped.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use autobook_api::{config::ApiConfig, start_server};
/// use autobook_store::{Scheduler, create_store};
///
/// let config = ApiConfig::from_env()?;
/// let scheduler = Scheduler::with_business_hours(create_store(), config.business_hours);
/// start_server(config, Arc::new(scheduler)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    scheduler: Arc<dyn AppointmentService>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { scheduler });
    let app = build_router(&config, state)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
