//! Domain entities

mod feature_record;
mod forecast_sample;
mod rain_prediction;

pub use feature_record::{
    CATEGORICAL_COLUMNS, FeatureRecord, FeatureValue, MIN_FORECAST_ENTRIES, NUMERIC_COLUMNS,
};
pub use forecast_sample::ForecastSample;
pub use rain_prediction::{RAIN_LABEL, RainPrediction};
