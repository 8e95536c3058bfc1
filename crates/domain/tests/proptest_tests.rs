//! Property-based tests for domain types
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    DomainError, FeatureRecord, FeatureValue, ForecastSample, MIN_FORECAST_ENTRIES, RainPrediction,
    value_objects::GeoLocation,
};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// FeatureRecord Property Tests
// ============================================================================

mod feature_record_tests {
    use super::*;

    fn reading() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![Just(None), (-50.0f64..1100.0f64).prop_map(Some)]
    }

    fn forecast_sample() -> impl Strategy<Value = ForecastSample> {
        (
            reading(),
            reading(),
            reading(),
            reading(),
            reading(),
            reading(),
            reading(),
        )
            .prop_map(
                |(temperature, temperature_min, temperature_max, humidity, pressure, wind, clouds)| {
                    ForecastSample {
                        timestamp: None,
                        temperature,
                        temperature_min,
                        temperature_max,
                        humidity,
                        pressure,
                        wind_speed: wind,
                        cloud_cover: clouds,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn record_always_has_fourteen_keys(
            samples in prop::collection::vec(forecast_sample(), MIN_FORECAST_ENTRIES..10)
        ) {
            let record = FeatureRecord::from_forecast(&samples, "Greater Noida").unwrap();
            prop_assert_eq!(FeatureRecord::keys().count(), 14);
            for key in FeatureRecord::keys() {
                prop_assert!(record.get(key).is_some(), "missing column {}", key);
            }
        }

        #[test]
        fn afternoon_readings_come_from_third_step(
            samples in prop::collection::vec(forecast_sample(), MIN_FORECAST_ENTRIES..10)
        ) {
            let record = FeatureRecord::from_forecast(&samples, "Greater Noida").unwrap();
            prop_assert_eq!(record.humidity_3pm, samples[2].humidity);
            prop_assert_eq!(record.pressure_3pm, samples[2].pressure);
            prop_assert_eq!(record.wind_speed_3pm, samples[2].wind_speed);
            prop_assert_eq!(record.humidity_9am, samples[0].humidity);
            prop_assert_eq!(record.temp_3pm, samples[0].temperature);
        }

        #[test]
        fn missing_count_matches_absent_readings(
            samples in prop::collection::vec(forecast_sample(), MIN_FORECAST_ENTRIES..6)
        ) {
            let record = FeatureRecord::from_forecast(&samples, "Sydney").unwrap();
            let absent = record.numeric_values().iter().filter(|v| v.is_none()).count();
            prop_assert_eq!(record.missing_count(), absent);
            prop_assert_eq!(record.get("Location"), Some(FeatureValue::Categorical("Sydney")));
        }

        #[test]
        fn short_forecasts_rejected(
            samples in prop::collection::vec(forecast_sample(), 0..MIN_FORECAST_ENTRIES)
        ) {
            let err = FeatureRecord::from_forecast(&samples, "Greater Noida").unwrap_err();
            prop_assert_eq!(
                err,
                DomainError::incomplete_forecast(MIN_FORECAST_ENTRIES, samples.len())
            );
        }
    }
}

// ============================================================================
// RainPrediction Property Tests
// ============================================================================

mod rain_prediction_tests {
    use super::*;

    proptest! {
        #[test]
        fn only_yes_means_rain(label in "[A-Za-z]{0,8}") {
            let prediction = RainPrediction::from_label(label.clone());
            prop_assert_eq!(prediction.will_rain, label == "Yes");
            prop_assert_eq!(prediction.label, label);
        }
    }
}
