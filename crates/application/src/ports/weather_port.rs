//! Weather service port
//!
//! Defines the interface for forecast retrieval.

use async_trait::async_trait;
use domain::{ForecastSample, value_objects::GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the forecast for a location as time steps, earliest first
    async fn forecast_samples(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
