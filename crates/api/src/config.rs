//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Autobook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `BUSINESS_HOURS_OPEN`: Local hour the shop opens (default: 9)
//! - `BUSINESS_HOURS_CLOSE`: Local hour the shop closes (default: 17)

use autobook_core::business_hours::BusinessHours;
use chrono::NaiveTime;
use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

/// Configuration for the Autobook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use autobook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Local opening window applied to every appointment
    pub business_hours: BusinessHours,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            business_hours: BusinessHours::default(),
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The business hour values are not hours of the day, or open is not before close
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so callers can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Network settings
        let host = lookup("API_HOST").unwrap_or(defaults.host);
        let port = match lookup("API_PORT") {
            Some(port) => port.parse().wrap_err("Invalid API_PORT value")?,
            None => defaults.port,
        };

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS")
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.request_timeout);

        // Scheduling settings
        let open = parse_hour(lookup("BUSINESS_HOURS_OPEN"), "BUSINESS_HOURS_OPEN", 9)?;
        let close = parse_hour(lookup("BUSINESS_HOURS_CLOSE"), "BUSINESS_HOURS_CLOSE", 17)?;
        let business_hours =
            BusinessHours::new(open, close).map_err(|e| eyre!("Invalid business hours: {e}"))?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            business_hours,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_hour(value: Option<String>, key: &str, default: u32) -> Result<NaiveTime> {
    let hour = match value {
        Some(value) => value
            .parse::<u32>()
            .wrap_err_with(|| format!("Invalid {key} value"))?,
        None => default,
    };

    NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| eyre!("{key} must be between 0 and 23"))
}
