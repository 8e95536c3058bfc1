//! Fitted artifact fixtures for tests
//!
//! A small, hand-fitted pipeline whose logistic model keys on afternoon
//! humidity and pressure. Downstream crates use it to exercise loading and
//! request handling without real training output.

use domain::{FeatureRecord, NUMERIC_COLUMNS};

use crate::{
    Classifier, HandleUnknown, LogisticRegression, OneHotEncoder, PredictionPipeline,
    SimpleImputer, StandardScaler,
};

/// A model column the encoder never produces
pub const UNSEEN_MODEL_COLUMN: &str = "RainToday_Yes";

const MEANS: [f64; 13] = [
    12.0, 23.0, 40.0, 14.0, 18.0, 68.0, 51.0, 1017.0, 1015.0, 4.0, 4.5, 17.0, 21.5,
];
const SCALES: [f64; 13] = [
    6.4, 7.1, 13.6, 8.9, 8.8, 19.0, 20.8, 7.1, 7.0, 2.9, 2.7, 6.5, 6.9,
];

fn numeric_columns() -> Vec<String> {
    NUMERIC_COLUMNS.iter().map(ToString::to_string).collect()
}

/// Mean imputer over the numeric columns
#[must_use]
pub fn sample_imputer() -> SimpleImputer {
    SimpleImputer {
        feature_names_in: numeric_columns(),
        statistics: MEANS.to_vec(),
    }
}

/// Standard scaler over the numeric columns
#[must_use]
pub fn sample_scaler() -> StandardScaler {
    StandardScaler {
        feature_names_in: numeric_columns(),
        mean: MEANS.to_vec(),
        scale: SCALES.to_vec(),
    }
}

/// Location encoder that ignores unknown categories
#[must_use]
pub fn sample_encoder() -> OneHotEncoder {
    OneHotEncoder {
        feature_names_in: vec!["Location".to_string()],
        categories: vec![vec![
            "Albury".to_string(),
            "Greater Noida".to_string(),
            "Sydney".to_string(),
        ]],
        handle_unknown: HandleUnknown::Ignore,
    }
}

/// Logistic model with encoded columns first and one extra column
#[must_use]
pub fn sample_classifier() -> Classifier {
    let mut feature_names_in = vec![
        "Location_Albury".to_string(),
        "Location_Greater Noida".to_string(),
        "Location_Sydney".to_string(),
        UNSEEN_MODEL_COLUMN.to_string(),
    ];
    feature_names_in.extend(numeric_columns());

    let mut coef = vec![0.05, -0.05, 0.1, 0.8];
    coef.extend(NUMERIC_COLUMNS.iter().map(|column| match *column {
        "Humidity3pm" => 1.5,
        "Pressure3pm" => -1.0,
        _ => 0.0,
    }));

    Classifier::LogisticRegression(LogisticRegression {
        feature_names_in,
        classes: vec!["No".to_string(), "Yes".to_string()],
        coef,
        intercept: -0.5,
    })
}

/// All four fixtures assembled
#[must_use]
#[allow(clippy::expect_used)]
pub fn sample_pipeline() -> PredictionPipeline {
    PredictionPipeline::new(
        sample_imputer(),
        sample_scaler(),
        sample_encoder(),
        sample_classifier(),
    )
    .expect("fixture artifacts are consistent")
}

fn record_with(humidity_3pm: f64, pressure_3pm: f64) -> FeatureRecord {
    FeatureRecord {
        min_temp: Some(24.1),
        max_temp: Some(27.8),
        wind_gust_speed: Some(3.4),
        wind_speed_9am: Some(3.4),
        wind_speed_3pm: Some(4.1),
        humidity_9am: Some(61.0),
        humidity_3pm: Some(humidity_3pm),
        pressure_9am: Some(1009.0),
        pressure_3pm: Some(pressure_3pm),
        cloud_9am: Some(40.0),
        cloud_3pm: Some(40.0),
        temp_9am: Some(26.3),
        temp_3pm: Some(26.3),
        location: "Greater Noida".to_string(),
    }
}

/// A typical record with every reading present
#[must_use]
pub fn sample_record() -> FeatureRecord {
    record_with(58.0, 1008.0)
}

/// A record the sample model classifies as rain
#[must_use]
pub fn humid_record() -> FeatureRecord {
    record_with(95.0, 1000.0)
}

/// A record the sample model classifies as dry
#[must_use]
pub fn dry_record() -> FeatureRecord {
    record_with(20.0, 1025.0)
}
