//! OpenWeatherMap forecast client
//!
//! HTTP client for the OpenWeatherMap forecast API.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::ForecastResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// API key missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Unit system for returned readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, m/s
    #[default]
    Metric,
    /// Fahrenheit, mph
    Imperial,
    /// Kelvin, m/s
    Standard,
}

impl Units {
    /// Query parameter value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Unit system (default: metric)
    #[serde(default)]
    pub units: Units,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            units: Units::default(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the 3-hourly forecast for a location
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Forecast endpoint URL, without query parameters
    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success status to an error
    fn status_error(status: StatusCode) -> WeatherError {
        match status {
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized(format!("HTTP {status}")),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, units = %self.config.units))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        if self.config.api_key.is_empty() {
            return Err(WeatherError::Unauthorized("no API key configured".to_string()));
        }

        let url = self.forecast_url();
        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", self.config.units.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WeatherError::ConnectionFailed(e.without_url().to_string())
                } else {
                    WeatherError::RequestFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Forecast request failed");
            return Err(Self::status_error(status));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.without_url().to_string()))?;

        debug!(entries = forecast.list.len(), "Forecast received");
        Ok(forecast)
    }

    async fn is_healthy(&self) -> bool {
        self.get_forecast(0.0, 0.0).await.is_ok()
    }
}
