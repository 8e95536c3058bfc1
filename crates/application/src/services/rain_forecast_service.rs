//! Rain forecast service
//!
//! The home page use case: fetch the forecast for the configured location,
//! assemble one feature record and classify it.

use std::sync::Arc;

use domain::{FeatureRecord, RainPrediction, value_objects::GeoLocation};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{RainClassifierPort, WeatherPort},
};

/// Service answering "will it rain" for one fixed location
pub struct RainForecastService {
    weather: Arc<dyn WeatherPort>,
    classifier: Arc<dyn RainClassifierPort>,
    location: GeoLocation,
    location_label: String,
}

impl std::fmt::Debug for RainForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RainForecastService")
            .field("weather", &"<WeatherPort>")
            .field("classifier", &"<RainClassifierPort>")
            .field("location", &self.location)
            .field("location_label", &self.location_label)
            .finish()
    }
}

impl RainForecastService {
    /// Create a new service
    ///
    /// `location_label` is the categorical `Location` value fed to the
    /// encoder; it is independent of the coordinates queried.
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        classifier: Arc<dyn RainClassifierPort>,
        location: GeoLocation,
        location_label: impl Into<String>,
    ) -> Self {
        Self {
            weather,
            classifier,
            location,
            location_label: location_label.into(),
        }
    }

    /// Coordinates the forecast is fetched for
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Label used for the `Location` column
    #[must_use]
    pub fn location_label(&self) -> &str {
        &self.location_label
    }

    /// Fetch, assemble and classify
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::WeatherApi` if the forecast cannot be
    /// fetched, `ApplicationError::Domain` if it has fewer than three time
    /// steps, and `SchemaMismatch` or `Prediction` from the classifier.
    #[instrument(skip(self), fields(location = %self.location_label))]
    pub async fn predict(&self) -> Result<RainPrediction, ApplicationError> {
        let samples = self
            .weather
            .forecast_samples(&self.location)
            .await
            .inspect_err(|e| warn!(kind = e.kind(), error = %e, "Forecast fetch failed"))?;

        let record = FeatureRecord::from_forecast(&samples, self.location_label.as_str())?;
        debug!(
            entries = samples.len(),
            missing = record.missing_count(),
            "Assembled feature record"
        );

        let prediction = self.classifier.predict(&record)?;
        info!(
            label = %prediction.label,
            will_rain = prediction.will_rain,
            "Rain prediction complete"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockRainClassifierPort, MockWeatherPort};
    use domain::{DomainError, ForecastSample};

    fn step(humidity: f64) -> ForecastSample {
        ForecastSample {
            timestamp: Some(0),
            temperature: Some(30.0),
            temperature_min: Some(28.0),
            temperature_max: Some(32.0),
            humidity: Some(humidity),
            pressure: Some(1005.0),
            wind_speed: Some(3.5),
            cloud_cover: Some(40.0),
        }
    }

    fn location() -> GeoLocation {
        GeoLocation::new(25.0, 70.0).unwrap()
    }

    fn service(weather: MockWeatherPort, classifier: MockRainClassifierPort) -> RainForecastService {
        RainForecastService::new(
            Arc::new(weather),
            Arc::new(classifier),
            location(),
            "Greater Noida",
        )
    }

    #[tokio::test]
    async fn predicts_from_first_and_third_steps() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_forecast_samples()
            .withf(|loc| (loc.latitude() - 25.0).abs() < f64::EPSILON)
            .times(1)
            .returning(|_| Ok(vec![step(50.0), step(55.0), step(90.0), step(20.0)]));

        let mut classifier = MockRainClassifierPort::new();
        classifier
            .expect_predict()
            .withf(|record| {
                record.humidity_9am == Some(50.0)
                    && record.humidity_3pm == Some(90.0)
                    && record.location == "Greater Noida"
            })
            .times(1)
            .returning(|_| Ok(RainPrediction::from_label("Yes")));

        let prediction = service(weather, classifier).predict().await.unwrap();
        assert!(prediction.will_rain);
    }

    #[tokio::test]
    async fn short_forecast_is_domain_error_and_skips_classifier() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_forecast_samples()
            .returning(|_| Ok(vec![step(50.0), step(55.0)]));

        let mut classifier = MockRainClassifierPort::new();
        classifier.expect_predict().never();

        let err = service(weather, classifier).predict().await.unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Domain(DomainError::incomplete_forecast(3, 2))
        );
    }

    #[tokio::test]
    async fn weather_failure_propagates() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_forecast_samples()
            .returning(|_| Err(ApplicationError::WeatherApi("HTTP 401".to_string())));

        let mut classifier = MockRainClassifierPort::new();
        classifier.expect_predict().never();

        let err = service(weather, classifier).predict().await.unwrap_err();
        assert_eq!(err.kind(), "weather_api");
    }

    #[tokio::test]
    async fn classifier_error_propagates() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_forecast_samples()
            .returning(|_| Ok(vec![step(50.0), step(55.0), step(60.0)]));

        let mut classifier = MockRainClassifierPort::new();
        classifier
            .expect_predict()
            .returning(|_| Err(ApplicationError::SchemaMismatch("imputer".to_string())));

        let err = service(weather, classifier).predict().await.unwrap_err();
        assert!(matches!(err, ApplicationError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn repeated_calls_give_the_same_answer() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_forecast_samples()
            .times(2)
            .returning(|_| Ok(vec![step(50.0), step(55.0), step(60.0)]));

        let mut classifier = MockRainClassifierPort::new();
        classifier
            .expect_predict()
            .times(2)
            .returning(|record| {
                let humid = record.humidity_3pm.unwrap_or_default() > 70.0;
                Ok(RainPrediction::from_label(if humid { "Yes" } else { "No" }))
            });

        let service = service(weather, classifier);
        let first = service.predict().await.unwrap();
        let second = service.predict().await.unwrap();
        assert_eq!(first, second);
        assert!(!first.will_rain);
    }

    #[test]
    fn accessors() {
        let service = service(MockWeatherPort::new(), MockRainClassifierPort::new());
        assert_eq!(service.location_label(), "Greater Noida");
        assert_eq!(service.location(), location());
        assert!(format!("{service:?}").contains("Greater Noida"));
    }
}
