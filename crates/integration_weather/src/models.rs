//! Forecast data models
//!
//! Types for the OpenWeatherMap `/forecast` response. Numeric readings are
//! optional: the API omits fields it has no value for, and the caller decides
//! how to treat gaps.

use chrono::{DateTime, Utc};
use domain::ForecastSample;
use serde::{Deserialize, Serialize};

/// Temperature, pressure and humidity block of a forecast step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature (Celsius with metric units)
    pub temp: Option<f64>,
    /// Perceived temperature
    #[serde(default)]
    pub feels_like: Option<f64>,
    /// Minimum temperature within the step
    pub temp_min: Option<f64>,
    /// Maximum temperature within the step
    pub temp_max: Option<f64>,
    /// Sea level pressure in hPa
    pub pressure: Option<f64>,
    /// Relative humidity percentage
    pub humidity: Option<f64>,
}

/// Wind block of a forecast step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed (m/s with metric units)
    pub speed: Option<f64>,
    /// Direction in degrees
    #[serde(default)]
    pub deg: Option<f64>,
    /// Gust speed
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Cloud cover block of a forecast step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    /// Cloudiness percentage
    pub all: Option<f64>,
}

/// Condition summary of a forecast step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Condition id
    pub id: u16,
    /// Condition group (Rain, Snow, Clouds, ...)
    pub main: String,
    /// Condition text
    pub description: String,
}

/// One 3-hour step of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the step
    pub dt: i64,
    #[serde(default)]
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub clouds: Clouds,
    #[serde(default)]
    pub weather: Vec<WeatherSummary>,
    /// Probability of precipitation (0-1)
    #[serde(default)]
    pub pop: Option<f64>,
    /// Step time as text, e.g. `2024-06-01 12:00:00`
    #[serde(default)]
    pub dt_txt: Option<String>,
}

impl ForecastEntry {
    /// Step time as UTC
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    /// Reduce to the readings the classifier uses
    #[must_use]
    pub const fn to_sample(&self) -> ForecastSample {
        ForecastSample {
            timestamp: Some(self.dt),
            temperature: self.main.temp,
            temperature_min: self.main.temp_min,
            temperature_max: self.main.temp_max,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
            cloud_cover: self.clouds.all,
        }
    }
}

/// City block of the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// Full `/forecast` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Number of steps returned
    #[serde(default)]
    pub cnt: u32,
    /// Forecast steps, earliest first
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<City>,
}

impl ForecastResponse {
    /// All steps reduced to classifier readings
    #[must_use]
    pub fn samples(&self) -> Vec<ForecastSample> {
        self.list.iter().map(ForecastEntry::to_sample).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "dt": 1717243200,
        "main": {
            "temp": 31.2, "feels_like": 33.0, "temp_min": 30.1, "temp_max": 31.9,
            "pressure": 1002, "sea_level": 1002, "grnd_level": 990,
            "humidity": 48, "temp_kf": 1.1
        },
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "clouds": {"all": 75},
        "wind": {"speed": 4.6, "deg": 240, "gust": 6.1},
        "visibility": 10000,
        "pop": 0.32,
        "sys": {"pod": "d"},
        "dt_txt": "2024-06-01 12:00:00"
    }"#;

    #[test]
    fn parses_entry_and_ignores_unknown_fields() {
        let entry: ForecastEntry = serde_json::from_str(ENTRY).unwrap();
        assert_eq!(entry.main.temp, Some(31.2));
        assert_eq!(entry.main.pressure, Some(1002.0));
        assert_eq!(entry.wind.speed, Some(4.6));
        assert_eq!(entry.clouds.all, Some(75.0));
        assert_eq!(entry.weather[0].main, "Rain");
        assert_eq!(entry.pop, Some(0.32));
    }

    #[test]
    fn entry_time_from_timestamp() {
        let entry: ForecastEntry = serde_json::from_str(ENTRY).unwrap();
        let time = entry.time().unwrap();
        assert_eq!(time.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-06-01 12:00:00");
    }

    #[test]
    fn to_sample_copies_readings() {
        let entry: ForecastEntry = serde_json::from_str(ENTRY).unwrap();
        let sample = entry.to_sample();
        assert_eq!(sample.timestamp, Some(1_717_243_200));
        assert_eq!(sample.temperature_min, Some(30.1));
        assert_eq!(sample.temperature_max, Some(31.9));
        assert_eq!(sample.humidity, Some(48.0));
        assert_eq!(sample.cloud_cover, Some(75.0));
        assert!(sample.is_complete());
    }

    #[test]
    fn missing_blocks_become_missing_readings() {
        let entry: ForecastEntry = serde_json::from_str(r#"{"dt": 0}"#).unwrap();
        let sample = entry.to_sample();
        assert_eq!(sample.wind_speed, None);
        assert_eq!(sample.humidity, None);
        assert!(!sample.is_complete());
    }

    #[test]
    fn response_samples_keep_order() {
        let json = format!(r#"{{"cod": "200", "cnt": 2, "list": [{ENTRY}, {{"dt": 1}}]}}"#);
        let response: ForecastResponse = serde_json::from_str(&json).unwrap();
        let samples = response.samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp, Some(1_717_243_200));
        assert_eq!(samples[1].timestamp, Some(1));
    }
}
