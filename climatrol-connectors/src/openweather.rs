//! OpenWeatherMap Connector - Live Weather and Air-Quality Retrieval
//!
//! ## Overview
//!
//! This module pulls current outdoor conditions from OpenWeatherMap and
//! assembles them into the core's [`EnvironmentalReading`]. Two endpoints
//! are involved:
//!
//! - `/data/2.5/weather` - temperature, humidity, and the coordinates of
//!   the resolved location (metric units requested explicitly)
//! - `/data/2.5/air_pollution` - air quality at those coordinates
//!
//! ## Design Decisions
//!
//! ### Index Scale Mapping
//!
//! OpenWeatherMap reports air quality as a coarse 1-5 index, while the
//! decision engine and its thresholds work on the familiar 0-500 AQI
//! scale. The connector maps each index onto a representative point of
//! the matching EPA band:
//!
//! | OWM index | Meaning    | Mapped AQI |
//! |-----------|------------|------------|
//! | 1         | Good       | 25         |
//! | 2         | Fair       | 75         |
//! | 3         | Moderate   | 125        |
//! | 4         | Poor       | 175        |
//! | 5         | Very poor  | 300        |
//!
//! Unknown indices saturate at the "very poor" mapping rather than
//! pretending the air is clean.
//!
//! ### Error Triage
//!
//! Status handling mirrors the service's documented behavior: 401 means a
//! bad API key and 404 an unresolvable location - both fail immediately
//! since retrying cannot help. Rate limiting (429), server errors (5xx),
//! and transport failures retry with exponential backoff.
//!
//! ## Example Usage
//!
//! ```no_run
//! use climatrol_connectors::openweather::{OpenWeatherClient, WeatherConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WeatherConfig::new("your-api-key")
//!     .timeout_secs(10)
//!     .max_retries(2);
//! let client = OpenWeatherClient::new(config)?;
//!
//! let observation = client.current_weather("London", "UK").await?;
//! let aqi = client.air_quality(observation.latitude, observation.longitude).await?;
//! # Ok(())
//! # }
//! ```

use crate::{ConnectionStats, ReadingSource};
use climatrol_core::EnvironmentalReading;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

/// OpenWeatherMap connector errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service rejected the API key (HTTP 401)
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The city/country pair did not resolve (HTTP 404)
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The service returned another error status
    #[error("Upstream error {status}: {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Network or request error
    #[error("Request failed: {0}")]
    Request(String),

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Response decoded but did not contain the expected data
    #[error("Malformed response: {0}")]
    Malformed(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// OpenWeatherMap configuration
#[derive(Clone)]
pub struct WeatherConfig {
    /// API key, passed as the `appid` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Retry attempts after the initial request
    pub max_retries: u32,
    /// User agent string
    pub user_agent: String,
}

impl WeatherConfig {
    /// Create a configuration with the given API key and defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openweathermap.org".into(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            user_agent: format!("Climatrol/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Point the client at a different base URL (testing, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set retry attempts after the initial request
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }
}

/// Current conditions at a resolved location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherObservation {
    /// Outdoor air temperature (°C)
    pub temperature_c: f32,
    /// Outdoor relative humidity (%)
    pub humidity_pct: f32,
    /// Latitude of the resolved location
    pub latitude: f64,
    /// Longitude of the resolved location
    pub longitude: f64,
}

// Wire payloads - only the fields we consume

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    coord: Coord,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f32,
    humidity: f32,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AirPollutionMain,
}

#[derive(Debug, Deserialize)]
struct AirPollutionMain {
    aqi: u8,
}

/// Map the OpenWeatherMap 1-5 air-quality index onto the 0-500 AQI scale
///
/// Each index maps to a representative point of the matching EPA band;
/// anything outside 1-5 saturates at the "very poor" mapping.
pub fn owm_index_to_aqi(index: u8) -> u16 {
    match index {
        1 => 25,
        2 => 75,
        3 => 125,
        4 => 175,
        _ => 300,
    }
}

/// OpenWeatherMap client using the lightweight ureq agent
pub struct OpenWeatherClient {
    config: WeatherConfig,
    agent: ureq::Agent,
    stats: Arc<Mutex<ConnectionStats>>,
}

impl OpenWeatherClient {
    /// Create a new client
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        // Validate base URL
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(WeatherError::Config(
                "Base URL must start with http:// or https://".into(),
            ));
        }

        if config.api_key.is_empty() {
            return Err(WeatherError::Config("API key must not be empty".into()));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: Arc::new(Mutex::new(ConnectionStats::default())),
        })
    }

    /// Fetch current weather for a city/country pair
    pub async fn current_weather(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherObservation, WeatherError> {
        log::debug!("fetching current weather for {city},{country}");

        let url = format!("{}/data/2.5/weather", self.config.base_url);
        let request = self
            .agent
            .get(&url)
            .query("q", &format!("{city},{country}"))
            .query("units", "metric")
            .query("appid", &self.config.api_key);

        let payload: WeatherResponse = self.execute_with_retry(request).await?;

        Ok(WeatherObservation {
            temperature_c: payload.main.temp,
            humidity_pct: payload.main.humidity,
            latitude: payload.coord.lat,
            longitude: payload.coord.lon,
        })
    }

    /// Fetch the air-quality index at coordinates, mapped to the 0-500 scale
    pub async fn air_quality(&self, lat: f64, lon: f64) -> Result<u16, WeatherError> {
        log::debug!("fetching air quality at {lat:.3},{lon:.3}");

        let url = format!("{}/data/2.5/air_pollution", self.config.base_url);
        let request = self
            .agent
            .get(&url)
            .query("lat", &lat.to_string())
            .query("lon", &lon.to_string())
            .query("appid", &self.config.api_key);

        let payload: AirPollutionResponse = self.execute_with_retry(request).await?;

        let entry = payload
            .list
            .first()
            .ok_or(WeatherError::Malformed("air pollution response has no entries"))?;

        Ok(owm_index_to_aqi(entry.main.aqi))
    }

    /// Fetch weather and air quality combined into one reading
    pub async fn fetch_reading(
        &self,
        city: &str,
        country: &str,
    ) -> Result<EnvironmentalReading, WeatherError> {
        let weather = self.current_weather(city, country).await?;
        let aqi = self.air_quality(weather.latitude, weather.longitude).await?;

        Ok(EnvironmentalReading::new(
            weather.temperature_c,
            weather.humidity_pct,
            aqi,
        ))
    }

    /// Get request statistics
    pub fn stats(&self) -> ConnectionStats {
        self.stats.lock().unwrap().clone()
    }

    /// Execute request with retry logic
    async fn execute_with_retry<T: for<'de> Deserialize<'de>>(
        &self,
        request: ureq::Request,
    ) -> Result<T, WeatherError> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff
                let delay = Duration::from_millis(100 * (1 << attempt));
                log::warn!("retrying request (attempt {attempt}) after {delay:?}");
                self.stats.lock().unwrap().retries += 1;
                tokio::time::sleep(delay).await;
            }

            match request.clone().call() {
                Ok(resp) => {
                    self.stats.lock().unwrap().requests_sent += 1;

                    let text = resp
                        .into_string()
                        .map_err(|e| WeatherError::Request(e.to_string()))?;

                    return serde_json::from_str(&text)
                        .map_err(|e| WeatherError::Serialization(e.to_string()));
                }
                Err(ureq::Error::Status(code, resp)) => {
                    // Client errors fail immediately - retrying cannot help
                    let error = match code {
                        401 => WeatherError::InvalidApiKey,
                        404 => WeatherError::LocationNotFound(
                            resp.into_string().unwrap_or_default(),
                        ),
                        code => WeatherError::Upstream {
                            status: code,
                            message: resp.into_string().unwrap_or_default(),
                        },
                    };

                    if code >= 500 || code == 429 {
                        last_error = Some(error);
                        continue;
                    }

                    return Err(self.record_failure(error));
                }
                Err(ureq::Error::Transport(e)) => {
                    last_error = Some(WeatherError::Request(e.to_string()));
                    continue;
                }
            }
        }

        // All retries exhausted
        let error = last_error.unwrap_or_else(|| WeatherError::Request("Unknown error".into()));
        Err(self.record_failure(error))
    }

    fn record_failure(&self, error: WeatherError) -> WeatherError {
        let mut stats = self.stats.lock().unwrap();
        stats.requests_failed += 1;
        stats.last_error = Some(error.to_string());
        error
    }
}

#[async_trait::async_trait]
impl ReadingSource for OpenWeatherClient {
    type Error = WeatherError;

    async fn fetch_reading(
        &self,
        city: &str,
        country: &str,
    ) -> Result<EnvironmentalReading, Self::Error> {
        OpenWeatherClient::fetch_reading(self, city, country).await
    }
}
