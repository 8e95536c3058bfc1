//! Adapters implementing application ports

mod rain_classifier_adapter;
mod weather_adapter;

pub use rain_classifier_adapter::RainClassifierAdapter;
pub use weather_adapter::WeatherAdapter;
