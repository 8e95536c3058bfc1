//! Fitted artifact trait
//!
//! Every preprocessing stage and model is deserialized from a JSON document
//! and checked for internal consistency before use.

use serde::de::DeserializeOwned;

use crate::PipelineError;

/// A stage whose parameters were fitted offline
pub trait FittedArtifact: DeserializeOwned + Send + Sync + 'static {
    /// Short name used in errors and logs
    const NAME: &'static str;

    /// Check that the fitted parameters agree with each other
    fn validate(&self) -> Result<(), PipelineError>;

    /// Columns the stage was fitted on
    fn feature_names_in(&self) -> &[String];

    /// Parse and validate an artifact from JSON bytes
    fn from_json_slice(bytes: &[u8]) -> Result<Self, PipelineError> {
        let artifact: Self = serde_json::from_slice(bytes)
            .map_err(|e| PipelineError::invalid_artifact(Self::NAME, e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }
}

/// Require a parameter vector to have one entry per input column
pub(crate) fn check_len(
    artifact: &'static str,
    field: &str,
    expected: usize,
    actual: usize,
) -> Result<(), PipelineError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PipelineError::invalid_artifact(
            artifact,
            format!("{field} has {actual} entries, expected {expected}"),
        ))
    }
}

/// Require fitted column names to be non-empty
pub(crate) fn check_columns(artifact: &'static str, columns: &[String]) -> Result<(), PipelineError> {
    if columns.is_empty() {
        return Err(PipelineError::invalid_artifact(
            artifact,
            "feature_names_in is empty",
        ));
    }
    Ok(())
}
