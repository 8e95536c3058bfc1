//! Rain classifier adapter - Implements RainClassifierPort using ml_pipeline

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RainClassifierPort;
use domain::{FeatureRecord, RainPrediction};
use ml_pipeline::{PipelineError, PredictionPipeline};

/// Adapter over a loaded prediction pipeline
#[derive(Debug, Clone)]
pub struct RainClassifierAdapter {
    pipeline: Arc<PredictionPipeline>,
}

impl RainClassifierAdapter {
    #[must_use]
    pub const fn new(pipeline: Arc<PredictionPipeline>) -> Self {
        Self { pipeline }
    }

    fn map_error(err: &PipelineError) -> ApplicationError {
        if err.is_schema_error() {
            ApplicationError::SchemaMismatch(err.to_string())
        } else {
            ApplicationError::Prediction(err.to_string())
        }
    }
}

impl RainClassifierPort for RainClassifierAdapter {
    fn predict(&self, record: &FeatureRecord) -> Result<RainPrediction, ApplicationError> {
        self.pipeline
            .predict(record)
            .map_err(|e| Self::map_error(&e))
    }

    fn feature_count(&self) -> usize {
        self.pipeline.model_features().len()
    }
}
