//! OpenWeatherMap forecast integration
//!
//! Client for the OpenWeatherMap 5 day / 3 hour forecast API
//! (<https://openweathermap.org/forecast5>). Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, Units, WeatherClient, WeatherConfig, WeatherError};
pub use models::{City, Clouds, ForecastEntry, ForecastResponse, MainReadings, WeatherSummary, Wind};
