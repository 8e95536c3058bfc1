//! One-hot encoding of categorical columns

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CategoricalRow, FittedArtifact, NumericRow, PipelineError,
    artifact::{check_columns, check_len},
};

/// What to do with a category not seen during fitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Fail the transform
    #[default]
    Error,
    /// Encode as all zeros
    Ignore,
}

/// Expands each categorical column into one indicator column per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    /// Columns seen during fitting, in order
    pub feature_names_in: Vec<String>,
    /// Known categories per input column
    pub categories: Vec<Vec<String>>,
    /// Unknown category policy
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
}

impl OneHotEncoder {
    /// Output column names, `<column>_<category>`
    #[must_use]
    pub fn feature_names_out(&self) -> Vec<String> {
        self.feature_names_in
            .iter()
            .zip(&self.categories)
            .flat_map(|(column, cats)| cats.iter().map(move |cat| format!("{column}_{cat}")))
            .collect()
    }

    /// Encode a categorical row into indicator columns
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::SchemaMismatch` for unexpected input columns
    /// and `PipelineError::UnknownCategory` for unseen values when
    /// `handle_unknown` is `error`.
    pub fn transform(&self, row: &CategoricalRow) -> Result<NumericRow, PipelineError> {
        row.ensure_columns(Self::NAME, &self.feature_names_in)?;

        let mut values = Vec::with_capacity(self.categories.iter().map(Vec::len).sum());
        for ((column, value), cats) in self
            .feature_names_in
            .iter()
            .zip(row.values())
            .zip(&self.categories)
        {
            let hit = cats.iter().position(|c| c == value);
            if hit.is_none() {
                match self.handle_unknown {
                    HandleUnknown::Error => {
                        return Err(PipelineError::UnknownCategory {
                            column: column.clone(),
                            value: value.clone(),
                        });
                    },
                    HandleUnknown::Ignore => {
                        debug!(column = %column, value = %value, "Unknown category encoded as zeros");
                    },
                }
            }
            values.extend((0..cats.len()).map(|i| if Some(i) == hit { 1.0 } else { 0.0 }));
        }

        NumericRow::new(self.feature_names_out(), values)
    }
}

impl FittedArtifact for OneHotEncoder {
    const NAME: &'static str = "encoder";

    fn validate(&self) -> Result<(), PipelineError> {
        check_columns(Self::NAME, &self.feature_names_in)?;
        check_len(
            Self::NAME,
            "categories",
            self.feature_names_in.len(),
            self.categories.len(),
        )?;
        if let Some(i) = self.categories.iter().position(Vec::is_empty) {
            return Err(PipelineError::invalid_artifact(
                Self::NAME,
                format!("no categories for {}", self.feature_names_in[i]),
            ));
        }
        Ok(())
    }

    fn feature_names_in(&self) -> &[String] {
        &self.feature_names_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(handle_unknown: HandleUnknown) -> OneHotEncoder {
        OneHotEncoder {
            feature_names_in: vec!["Location".to_string()],
            categories: vec![vec![
                "Albury".to_string(),
                "Greater Noida".to_string(),
                "Sydney".to_string(),
            ]],
            handle_unknown,
        }
    }

    fn location(value: &str) -> CategoricalRow {
        CategoricalRow::new(vec!["Location".to_string()], vec![value.to_string()]).unwrap()
    }

    #[test]
    fn feature_names_out_prefix_column() {
        assert_eq!(
            encoder(HandleUnknown::Error).feature_names_out(),
            vec![
                "Location_Albury",
                "Location_Greater Noida",
                "Location_Sydney"
            ]
        );
    }

    #[test]
    fn encodes_known_category() {
        let out = encoder(HandleUnknown::Error)
            .transform(&location("Greater Noida"))
            .unwrap();
        assert_eq!(out.values(), &[0.0, 1.0, 0.0]);
        assert_eq!(out.get("Location_Greater Noida"), Some(&1.0));
    }

    #[test]
    fn unknown_category_errors_by_default() {
        let err = encoder(HandleUnknown::Error)
            .transform(&location("Perth"))
            .unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownCategory {
                column: "Location".to_string(),
                value: "Perth".to_string()
            }
        );
    }

    #[test]
    fn unknown_category_ignored_is_all_zero() {
        let out = encoder(HandleUnknown::Ignore)
            .transform(&location("Perth"))
            .unwrap();
        assert_eq!(out.values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn handle_unknown_defaults_to_error_when_absent() {
        let json = br#"{"feature_names_in":["Location"],"categories":[["A"]]}"#;
        let parsed = OneHotEncoder::from_json_slice(json).unwrap();
        assert_eq!(parsed.handle_unknown, HandleUnknown::Error);
    }

    #[test]
    fn validate_rejects_empty_categories() {
        let bad = OneHotEncoder {
            feature_names_in: vec!["Location".to_string()],
            categories: vec![vec![]],
            handle_unknown: HandleUnknown::Ignore,
        };
        assert!(bad.validate().is_err());
    }
}
