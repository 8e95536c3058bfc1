//! Feature record entity
//!
//! The single-row input the rain classifier was trained on. Column names
//! follow the training dataset: morning (9am) readings come from the first
//! forecast step and afternoon (3pm) readings from the third.

use serde::{Deserialize, Serialize};

use crate::{DomainError, ForecastSample};

/// Numeric columns in training order
pub const NUMERIC_COLUMNS: [&str; 13] = [
    "MinTemp",
    "MaxTemp",
    "WindGustSpeed",
    "WindSpeed9am",
    "WindSpeed3pm",
    "Humidity9am",
    "Humidity3pm",
    "Pressure9am",
    "Pressure3pm",
    "Cloud9am",
    "Cloud3pm",
    "Temp9am",
    "Temp3pm",
];

/// Categorical columns in training order
pub const CATEGORICAL_COLUMNS: [&str; 1] = ["Location"];

/// Forecast steps needed to fill the afternoon readings (index 2)
pub const MIN_FORECAST_ENTRIES: usize = 3;

const MORNING: usize = 0;
const AFTERNOON: usize = 2;

/// A borrowed view of one cell in the record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    /// Numeric reading, `None` when missing
    Numeric(Option<f64>),
    /// Categorical label
    Categorical(&'a str),
}

/// One row of classifier input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureRecord {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub wind_gust_speed: Option<f64>,
    #[serde(rename = "WindSpeed9am")]
    pub wind_speed_9am: Option<f64>,
    #[serde(rename = "WindSpeed3pm")]
    pub wind_speed_3pm: Option<f64>,
    #[serde(rename = "Humidity9am")]
    pub humidity_9am: Option<f64>,
    #[serde(rename = "Humidity3pm")]
    pub humidity_3pm: Option<f64>,
    #[serde(rename = "Pressure9am")]
    pub pressure_9am: Option<f64>,
    #[serde(rename = "Pressure3pm")]
    pub pressure_3pm: Option<f64>,
    #[serde(rename = "Cloud9am")]
    pub cloud_9am: Option<f64>,
    #[serde(rename = "Cloud3pm")]
    pub cloud_3pm: Option<f64>,
    #[serde(rename = "Temp9am")]
    pub temp_9am: Option<f64>,
    #[serde(rename = "Temp3pm")]
    pub temp_3pm: Option<f64>,
    pub location: String,
}

impl FeatureRecord {
    /// Assemble a record from forecast steps 0 and 2
    ///
    /// Gust speed reuses the morning wind speed, and the afternoon cloud
    /// and temperature readings reuse the morning step; this is the layout
    /// the classifier was fitted with.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteForecast` when fewer than
    /// [`MIN_FORECAST_ENTRIES`] samples are given, and
    /// `DomainError::ValidationError` for a blank location label.
    pub fn from_forecast(
        samples: &[ForecastSample],
        location: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if samples.len() < MIN_FORECAST_ENTRIES {
            return Err(DomainError::incomplete_forecast(
                MIN_FORECAST_ENTRIES,
                samples.len(),
            ));
        }

        let location = location.into();
        if location.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "location label must not be empty".to_string(),
            ));
        }

        let morning = &samples[MORNING];
        let afternoon = &samples[AFTERNOON];

        Ok(Self {
            min_temp: morning.temperature_min,
            max_temp: morning.temperature_max,
            wind_gust_speed: morning.wind_speed,
            wind_speed_9am: morning.wind_speed,
            wind_speed_3pm: afternoon.wind_speed,
            humidity_9am: morning.humidity,
            humidity_3pm: afternoon.humidity,
            pressure_9am: morning.pressure,
            pressure_3pm: afternoon.pressure,
            cloud_9am: morning.cloud_cover,
            cloud_3pm: morning.cloud_cover,
            temp_9am: morning.temperature,
            temp_3pm: morning.temperature,
            location,
        })
    }

    /// All column names, numeric first
    pub fn keys() -> impl Iterator<Item = &'static str> {
        NUMERIC_COLUMNS
            .iter()
            .chain(CATEGORICAL_COLUMNS.iter())
            .copied()
    }

    /// Numeric values in [`NUMERIC_COLUMNS`] order
    #[must_use]
    pub const fn numeric_values(&self) -> [Option<f64>; 13] {
        [
            self.min_temp,
            self.max_temp,
            self.wind_gust_speed,
            self.wind_speed_9am,
            self.wind_speed_3pm,
            self.humidity_9am,
            self.humidity_3pm,
            self.pressure_9am,
            self.pressure_3pm,
            self.cloud_9am,
            self.cloud_3pm,
            self.temp_9am,
            self.temp_3pm,
        ]
    }

    /// Look up a numeric column by name
    ///
    /// Returns `None` if `column` is not a numeric column.
    #[must_use]
    pub fn numeric(&self, column: &str) -> Option<Option<f64>> {
        let index = NUMERIC_COLUMNS.iter().position(|c| *c == column)?;
        Some(self.numeric_values()[index])
    }

    /// Look up a categorical column by name
    #[must_use]
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "Location" => Some(self.location.as_str()),
            _ => None,
        }
    }

    /// Look up any column by name
    #[must_use]
    pub fn get(&self, column: &str) -> Option<FeatureValue<'_>> {
        self.numeric(column)
            .map(FeatureValue::Numeric)
            .or_else(|| self.categorical(column).map(FeatureValue::Categorical))
    }

    /// Number of numeric readings that are missing
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.numeric_values().iter().filter(|v| v.is_none()).count()
    }
}
