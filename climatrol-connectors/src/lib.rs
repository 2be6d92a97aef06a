//! Environmental Data Connectors for Climatrol
//!
//! ## Overview
//!
//! The decision core consumes [`EnvironmentalReading`]s but never constructs
//! them; that is this crate's job. It adapts external data services to the
//! core's input type so a dashboard or automation loop can poll conditions
//! and feed them straight into an evaluation.
//!
//! ## Why HTTP Polling?
//!
//! Weather and air-quality data change over minutes, not milliseconds, and
//! the public providers expose plain REST APIs. Polling over HTTPS is:
//! - Firewall-friendly and easy to debug
//! - Stateless - no connection to keep alive between samples
//! - A good fit for the core's fresh-reading-per-evaluation model
//!
//! ## Connector Design Patterns
//!
//! ### Retry Logic
//!
//! Transient failures are retried with exponential backoff:
//! ```text
//! retry_delay = base * 2^attempt
//! ```
//! Server errors (5xx) and rate limiting (429) retry; client errors
//! (bad key, unknown location) fail immediately.
//!
//! ### Credential Handling
//!
//! API keys are passed explicitly through configuration structs. The crate
//! never reads environment variables or process-wide state, and keys are
//! never logged.
//!
//! ## Example Usage
//!
//! ```no_run
//! use climatrol_connectors::openweather::{OpenWeatherClient, WeatherConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WeatherConfig::new("your-api-key").timeout_secs(10);
//! let client = OpenWeatherClient::new(config)?;
//!
//! // One reading, ready for DeviceController::evaluate
//! let reading = client.fetch_reading("London", "UK").await?;
//! println!("{:.1}°C, {:.0}% RH, AQI {}", reading.temperature_c, reading.humidity_pct, reading.aqi);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "openweather")]
pub mod openweather;

// Re-export common types
#[cfg(feature = "openweather")]
pub use openweather::{OpenWeatherClient, WeatherConfig, WeatherError, WeatherObservation};

#[cfg(feature = "std")]
use climatrol_core::EnvironmentalReading;

/// Async source of environmental readings
///
/// The seam a dashboard codes against: production uses a live weather
/// connector, tests substitute a canned source.
#[cfg(feature = "std")]
#[async_trait::async_trait]
pub trait ReadingSource: Send {
    /// Connector-specific error type
    type Error;

    /// Fetch a fresh reading for the given location
    async fn fetch_reading(
        &self,
        city: &str,
        country: &str,
    ) -> Result<EnvironmentalReading, Self::Error>;
}

/// Request statistics common to all connectors
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone)]
pub struct ConnectionStats {
    /// Total requests completed successfully
    pub requests_sent: u64,
    /// Total requests that failed after all retries
    pub requests_failed: u64,
    /// Number of retry attempts made
    pub retries: u32,
    /// Last error message
    pub last_error: Option<String>,
}
