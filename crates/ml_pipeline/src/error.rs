//! Pipeline errors

use thiserror::Error;

/// Errors raised while validating artifacts or running the pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Input columns differ from the columns a stage was fitted on
    #[error("{stage} expects columns [{}], got [{}]", .expected.join(", "), .actual.join(", "))]
    SchemaMismatch {
        stage: &'static str,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// A column appears more than once after concatenation
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A category was not seen during fitting
    #[error("Unknown category '{value}' for column {column}")]
    UnknownCategory { column: String, value: String },

    /// Input width differs from what the model was fitted on
    #[error("Shape mismatch: model expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A value reaching the model is NaN or infinite
    #[error("Non-finite value in column {0}")]
    NonFiniteInput(String),

    /// Fitted parameters are internally inconsistent
    #[error("Invalid {artifact} artifact: {reason}")]
    InvalidArtifact {
        artifact: &'static str,
        reason: String,
    },
}

impl PipelineError {
    /// Create a schema mismatch error for a stage
    pub fn schema_mismatch(stage: &'static str, expected: &[String], actual: &[String]) -> Self {
        Self::SchemaMismatch {
            stage,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Create an invalid artifact error
    pub fn invalid_artifact(artifact: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            artifact,
            reason: reason.into(),
        }
    }

    /// Whether the error comes from a column layout disagreement
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. } | Self::DuplicateColumn(_) | Self::ShapeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_lists_columns() {
        let err = PipelineError::schema_mismatch(
            "imputer",
            &["MinTemp".to_string(), "MaxTemp".to_string()],
            &["MinTemp".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.starts_with("imputer expects columns [MinTemp, MaxTemp]"));
        assert!(msg.ends_with("got [MinTemp]"));
        assert!(err.is_schema_error());
    }

    #[test]
    fn shape_mismatch_is_schema_error() {
        let err = PipelineError::ShapeMismatch {
            expected: 14,
            actual: 13,
        };
        assert!(err.is_schema_error());
        assert!(err.to_string().contains("14"));
    }

    #[test]
    fn unknown_category_is_not_schema_error() {
        let err = PipelineError::UnknownCategory {
            column: "Location".to_string(),
            value: "Atlantis".to_string(),
        };
        assert!(!err.is_schema_error());
        assert_eq!(err.to_string(), "Unknown category 'Atlantis' for column Location");
    }
}
