//! Weather provider and prediction configuration.

use domain::value_objects::{GeoLocation, InvalidCoordinates};
use integration_weather::{Units, WeatherConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Latitude of the forecast location
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude of the forecast location
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Unit system requested from the API
    #[serde(default)]
    pub units: Units,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_latitude() -> f64 {
    25.0
}

const fn default_longitude() -> f64 {
    70.0
}

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            latitude: default_latitude(),
            longitude: default_longitude(),
            units: Units::default(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// The configured coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude or longitude is out of range.
    pub fn location(&self) -> Result<GeoLocation, InvalidCoordinates> {
        GeoLocation::new(self.latitude, self.longitude)
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().trim().to_string())
                .unwrap_or_default(),
            units: self.units,
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Prediction Configuration
// ==============================

/// Prediction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Value of the categorical `Location` column
    #[serde(default = "default_location_label")]
    pub location_label: String,
}

fn default_location_label() -> String {
    "Greater Noida".to_string()
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            location_label: default_location_label(),
        }
    }
}
