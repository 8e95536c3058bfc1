//! End-to-end prediction pipeline

use domain::{FeatureRecord, RainPrediction};
use tracing::{debug, instrument};

use crate::{
    CategoricalRow, Classifier, FittedArtifact, NumericRow, OneHotEncoder, PipelineError,
    SimpleImputer, StandardScaler,
};

/// The four fitted artifacts, applied in a fixed order
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PredictionPipeline {
    imputer: SimpleImputer,
    scaler: StandardScaler,
    encoder: OneHotEncoder,
    classifier: Classifier,
}

impl PredictionPipeline {
    /// Assemble a pipeline from validated artifacts
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidArtifact` if any artifact fails its own
    /// validation, or `PipelineError::SchemaMismatch` if the imputer and
    /// scaler were fitted on different columns.
    pub fn new(
        imputer: SimpleImputer,
        scaler: StandardScaler,
        encoder: OneHotEncoder,
        classifier: Classifier,
    ) -> Result<Self, PipelineError> {
        imputer.validate()?;
        scaler.validate()?;
        encoder.validate()?;
        classifier.validate()?;

        if imputer.feature_names_in != scaler.feature_names_in {
            return Err(PipelineError::schema_mismatch(
                StandardScaler::NAME,
                &scaler.feature_names_in,
                &imputer.feature_names_in,
            ));
        }

        Ok(Self {
            imputer,
            scaler,
            encoder,
            classifier,
        })
    }

    /// Columns the classifier expects, in order
    #[must_use]
    pub fn model_features(&self) -> &[String] {
        self.classifier.feature_names_in()
    }

    /// Run preprocessing and return the row the classifier will see
    ///
    /// Imputes and scales the numeric columns, one-hot encodes the
    /// categorical columns, concatenates both and reindexes to the model's
    /// training order with zeros for absent columns.
    pub fn prepare(&self, record: &FeatureRecord) -> Result<NumericRow, PipelineError> {
        let numeric = NumericRow::numeric_from_record(record);
        let imputed = self.imputer.transform(numeric)?;
        let scaled = self.scaler.transform(imputed)?;

        let categorical = CategoricalRow::categorical_from_record(record);
        let encoded = self.encoder.transform(&categorical)?;

        let combined = scaled.concat(encoded)?;
        let aligned = combined.reindex(self.model_features(), 0.0);

        let filled = aligned
            .columns()
            .iter()
            .filter(|c| combined.get(c).is_none())
            .count();
        let dropped = combined
            .columns()
            .iter()
            .filter(|c| aligned.get(c).is_none())
            .count();
        if filled > 0 || dropped > 0 {
            debug!(filled, dropped, "Reindexed preprocessing output to model columns");
        }

        Ok(aligned)
    }

    /// Predict whether it will rain for a feature record
    ///
    /// # Errors
    ///
    /// Propagates any schema, category or shape error from the stages.
    #[instrument(skip(self, record), fields(location = %record.location))]
    pub fn predict(&self, record: &FeatureRecord) -> Result<RainPrediction, PipelineError> {
        let aligned = self.prepare(record)?;
        let label = self.classifier.predict(&aligned)?;
        debug!(label = %label, "Classifier produced label");
        Ok(RainPrediction::from_label(label))
    }
}
