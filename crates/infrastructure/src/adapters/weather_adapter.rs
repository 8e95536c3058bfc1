//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{ForecastSample, value_objects::GeoLocation};
use integration_weather::{
    ForecastEntry, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap forecast API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl WeatherAdapter {
    /// Create with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Every client failure is a weather API failure to the caller
    fn map_error(err: &WeatherError) -> ApplicationError {
        ApplicationError::WeatherApi(err.to_string())
    }
}

/// Steps with at least one reading absent; the imputer fills those in
fn incomplete_steps(samples: &[ForecastSample]) -> usize {
    samples.iter().filter(|s| !s.is_complete()).count()
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn forecast_samples(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let forecast = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(|e| Self::map_error(&e))?;

        let samples = forecast.samples();
        debug!(
            entries = samples.len(),
            incomplete = incomplete_steps(&samples),
            first_step = ?forecast.list.first().and_then(ForecastEntry::time),
            city = forecast.city.as_ref().map_or("", |c| c.name.as_str()),
            "Forecast fetched"
        );
        Ok(samples)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
