//! Single-row labeled frames
//!
//! Every request carries exactly one record, so a frame is a list of column
//! names with one value per column.

use std::collections::HashSet;

use domain::{CATEGORICAL_COLUMNS, FeatureRecord, NUMERIC_COLUMNS};

use crate::PipelineError;

/// One row with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow<T> {
    columns: Vec<String>,
    values: Vec<T>,
}

/// Row of numeric features; missing values are NaN
pub type NumericRow = LabeledRow<f64>;

/// Row of categorical features
pub type CategoricalRow = LabeledRow<String>;

impl<T> LabeledRow<T> {
    /// Create a row from parallel column and value lists
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ShapeMismatch` if the lists differ in length.
    pub fn new(columns: Vec<String>, values: Vec<T>) -> Result<Self, PipelineError> {
        if columns.len() != values.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: columns.len(),
                actual: values.len(),
            });
        }
        Ok(Self { columns, values })
    }

    /// Column names in order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in column order
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Value of a named column
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&T> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Require the columns to equal `expected`, in order
    pub(crate) fn ensure_columns(
        &self,
        stage: &'static str,
        expected: &[String],
    ) -> Result<(), PipelineError> {
        if self.columns == expected {
            Ok(())
        } else {
            Err(PipelineError::schema_mismatch(stage, expected, &self.columns))
        }
    }

    /// Replace values, keeping the column names
    pub(crate) fn with_values<U>(self, values: Vec<U>) -> LabeledRow<U> {
        debug_assert_eq!(self.columns.len(), values.len());
        LabeledRow {
            columns: self.columns,
            values,
        }
    }

    /// Append the columns of `other`
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::DuplicateColumn` if both rows share a column.
    pub fn concat(mut self, other: Self) -> Result<Self, PipelineError> {
        let existing: HashSet<&str> = self.columns.iter().map(String::as_str).collect();
        if let Some(dup) = other.columns.iter().find(|c| existing.contains(c.as_str())) {
            return Err(PipelineError::DuplicateColumn(dup.clone()));
        }
        self.columns.extend(other.columns);
        self.values.extend(other.values);
        Ok(self)
    }
}

impl<T: Clone> LabeledRow<T> {
    /// Reorder to `columns`, filling absent ones with `fill`
    ///
    /// Columns not listed in `columns` are dropped.
    #[must_use]
    pub fn reindex(&self, columns: &[String], fill: T) -> Self {
        let values = columns
            .iter()
            .map(|c| self.get(c).cloned().unwrap_or_else(|| fill.clone()))
            .collect();
        Self {
            columns: columns.to_vec(),
            values,
        }
    }
}

impl NumericRow {
    /// Numeric columns of a record in training order, NaN for missing
    #[must_use]
    pub fn numeric_from_record(record: &FeatureRecord) -> Self {
        Self {
            columns: NUMERIC_COLUMNS.iter().map(ToString::to_string).collect(),
            values: record
                .numeric_values()
                .iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect(),
        }
    }

    /// First column holding a NaN or infinite value
    #[must_use]
    pub fn first_non_finite(&self) -> Option<&str> {
        self.columns
            .iter()
            .zip(&self.values)
            .find(|(_, v)| !v.is_finite())
            .map(|(c, _)| c.as_str())
    }
}

impl CategoricalRow {
    /// Categorical columns of a record in training order
    #[must_use]
    pub fn categorical_from_record(record: &FeatureRecord) -> Self {
        let columns: Vec<String> = CATEGORICAL_COLUMNS.iter().map(ToString::to_string).collect();
        let values = columns
            .iter()
            .map(|c| record.categorical(c).unwrap_or_default().to_string())
            .collect();
        Self { columns, values }
    }
}
