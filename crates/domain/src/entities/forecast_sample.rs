//! Forecast sample entity
//!
//! One time step of a provider forecast, reduced to the readings the
//! rain classifier uses. Readings are optional because providers omit
//! fields; absent values are imputed downstream.

use serde::{Deserialize, Serialize};

/// Readings from a single forecast time step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Unix timestamp of the time step
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Air temperature in Celsius
    pub temperature: Option<f64>,
    /// Minimum temperature within the time step in Celsius
    pub temperature_min: Option<f64>,
    /// Maximum temperature within the time step in Celsius
    pub temperature_max: Option<f64>,
    /// Relative humidity percentage (0-100)
    pub humidity: Option<f64>,
    /// Sea level pressure in hPa
    pub pressure: Option<f64>,
    /// Wind speed in m/s (metric units)
    pub wind_speed: Option<f64>,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: Option<f64>,
}

impl ForecastSample {
    /// Whether every reading is present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.temperature.is_some()
            && self.temperature_min.is_some()
            && self.temperature_max.is_some()
            && self.humidity.is_some()
            && self.pressure.is_some()
            && self.wind_speed.is_some()
            && self.cloud_cover.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_is_incomplete() {
        assert!(!ForecastSample::default().is_complete());
    }

    #[test]
    fn full_sample_is_complete() {
        let sample = ForecastSample {
            timestamp: Some(1_700_000_000),
            temperature: Some(21.0),
            temperature_min: Some(19.5),
            temperature_max: Some(22.1),
            humidity: Some(60.0),
            pressure: Some(1008.0),
            wind_speed: Some(3.2),
            cloud_cover: Some(40.0),
        };
        assert!(sample.is_complete());
    }

    #[test]
    fn timestamp_is_not_required_for_completeness() {
        let sample = ForecastSample {
            timestamp: None,
            temperature: Some(21.0),
            temperature_min: Some(19.5),
            temperature_max: Some(22.1),
            humidity: Some(60.0),
            pressure: Some(1008.0),
            wind_speed: Some(3.2),
            cloud_cover: Some(40.0),
        };
        assert!(sample.is_complete());
    }
}
