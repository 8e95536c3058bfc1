//! Standard scaling

use serde::{Deserialize, Serialize};

use crate::{
    FittedArtifact, NumericRow, PipelineError,
    artifact::{check_columns, check_len},
};

/// Centers and scales numeric columns: `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Columns seen during fitting, in order
    pub feature_names_in: Vec<String>,
    /// Per-column mean
    pub mean: Vec<f64>,
    /// Per-column standard deviation
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Scale each value with the fitted mean and deviation
    ///
    /// A zero deviation (constant column) divides by one.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::SchemaMismatch` if `row` does not have exactly
    /// the fitted columns in fitted order.
    pub fn transform(&self, row: NumericRow) -> Result<NumericRow, PipelineError> {
        row.ensure_columns(Self::NAME, &self.feature_names_in)?;
        let values = row
            .values()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect();
        Ok(row.with_values(values))
    }
}

impl FittedArtifact for StandardScaler {
    const NAME: &'static str = "scaler";

    fn validate(&self) -> Result<(), PipelineError> {
        check_columns(Self::NAME, &self.feature_names_in)?;
        let n = self.feature_names_in.len();
        check_len(Self::NAME, "mean", n, self.mean.len())?;
        check_len(Self::NAME, "scale", n, self.scale.len())?;
        if self.scale.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(PipelineError::invalid_artifact(
                Self::NAME,
                "scale must be finite and non-negative",
            ));
        }
        Ok(())
    }

    fn feature_names_in(&self) -> &[String] {
        &self.feature_names_in
    }
}
