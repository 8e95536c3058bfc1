//! Mean imputation

use serde::{Deserialize, Serialize};

use crate::{
    FittedArtifact, NumericRow, PipelineError,
    artifact::{check_columns, check_len},
};

/// Replaces missing numeric values with per-column statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleImputer {
    /// Columns seen during fitting, in order
    pub feature_names_in: Vec<String>,
    /// Fill value for each column
    pub statistics: Vec<f64>,
}

impl SimpleImputer {
    /// Fill NaN values with the fitted statistics
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
            .zip(&self.statistics)
            .map(|(v, fill)| if v.is_nan() { *fill } else { *v })
            .collect();
        Ok(row.with_values(values))
    }
}

impl FittedArtifact for SimpleImputer {
    const NAME: &'static str = "imputer";

    fn validate(&self) -> Result<(), PipelineError> {
        check_columns(Self::NAME, &self.feature_names_in)?;
        check_len(
            Self::NAME,
            "statistics",
            self.feature_names_in.len(),
            self.statistics.len(),
        )?;
        if let Some(i) = self.statistics.iter().position(|s| !s.is_finite()) {
            return Err(PipelineError::invalid_artifact(
                Self::NAME,
                format!("statistic for {} is not finite", self.feature_names_in[i]),
            ));
        }
        Ok(())
    }

    fn feature_names_in(&self) -> &[String] {
        &self.feature_names_in
    }
}
