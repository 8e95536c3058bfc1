//! Rain classifier port
//!
//! The loaded preprocessing and model artifacts, seen as a single
//! synchronous prediction step.

use domain::{FeatureRecord, RainPrediction};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the rain classifier
#[cfg_attr(test, automock)]
pub trait RainClassifierPort: Send + Sync {
    /// Predict whether it will rain for one feature record
    ///
    /// Pure CPU work; the result is deterministic for a given record.
    fn predict(&self, record: &FeatureRecord) -> Result<RainPrediction, ApplicationError>;

    /// Number of columns the underlying model was trained on
    fn feature_count(&self) -> usize;
}
