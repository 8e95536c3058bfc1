//! Port definitions (interfaces for adapters)

mod rain_classifier_port;
mod weather_port;

pub use rain_classifier_port::RainClassifierPort;
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use rain_classifier_port::MockRainClassifierPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
