//! Classifiers
//!
//! Two fitted model families are supported: binary logistic regression and a
//! single CART decision tree. Both carry the column order they were trained
//! with so the pipeline can align its output before predicting.

use serde::{Deserialize, Serialize};

use crate::{
    FittedArtifact, NumericRow, PipelineError,
    artifact::{check_columns, check_len},
};

/// Marker for leaf nodes in tree child arrays
const TREE_LEAF: i64 = -1;

/// A fitted classification model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// Binary logistic regression
    LogisticRegression(LogisticRegression),
    /// CART decision tree
    DecisionTree(DecisionTree),
}

/// Binary logistic regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Columns seen during fitting, in order
    pub feature_names_in: Vec<String>,
    /// Class labels; index 1 is the positive class
    pub classes: Vec<String>,
    /// One weight per input column
    pub coef: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

/// Decision tree in flat array form
///
/// Node `i` splits on `feature[i]` at `threshold[i]`: values less than or
/// equal to the threshold go to `children_left[i]`, others to
/// `children_right[i]`. Leaves have both children set to -1 and predict the
/// class with the largest weight in `value[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Columns seen during fitting, in order
    pub feature_names_in: Vec<String>,
    /// Class labels
    pub classes: Vec<String>,
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights
    pub value: Vec<Vec<f64>>,
}

impl LogisticRegression {
    /// Linear decision score for an aligned row
    fn decision(&self, x: &[f64]) -> f64 {
        self.coef
            .iter()
            .zip(x)
            .fold(self.intercept, |acc, (w, v)| w.mul_add(*v, acc))
    }

    fn predict_index(&self, x: &[f64]) -> usize {
        usize::from(self.decision(x) > 0.0)
    }

    fn validate(&self) -> Result<(), PipelineError> {
        check_columns(NAME, &self.feature_names_in)?;
        check_len(NAME, "coef", self.feature_names_in.len(), self.coef.len())?;
        if self.classes.len() != 2 {
            return Err(PipelineError::invalid_artifact(
                NAME,
                format!(
                    "logistic regression needs 2 classes, got {}",
                    self.classes.len()
                ),
            ));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|w| !w.is_finite()) {
            return Err(PipelineError::invalid_artifact(NAME, "non-finite weights"));
        }
        Ok(())
    }
}

impl DecisionTree {
    fn predict_index(&self, x: &[f64]) -> Result<usize, PipelineError> {
        let mut node = 0usize;
        // A valid tree reaches a leaf in at most one step per node.
        for _ in 0..self.node_count() {
            let left = self.children_left[node];
            if left == TREE_LEAF {
                return Ok(argmax(&self.value[node]));
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
        Err(PipelineError::invalid_artifact(
            NAME,
            "tree traversal did not reach a leaf",
        ))
    }

    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self) -> Result<(), PipelineError> {
        check_columns(NAME, &self.feature_names_in)?;
        if self.classes.is_empty() {
            return Err(PipelineError::invalid_artifact(NAME, "classes is empty"));
        }
        let nodes = self.node_count();
        if nodes == 0 {
            return Err(PipelineError::invalid_artifact(NAME, "tree has no nodes"));
        }
        check_len(NAME, "children_right", nodes, self.children_right.len())?;
        check_len(NAME, "feature", nodes, self.feature.len())?;
        check_len(NAME, "threshold", nodes, self.threshold.len())?;
        check_len(NAME, "value", nodes, self.value.len())?;

        let features = self.feature_names_in.len() as i64;
        for i in 0..nodes {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == TREE_LEAF {
                if right != TREE_LEAF {
                    return Err(PipelineError::invalid_artifact(
                        NAME,
                        format!("node {i} has only one child"),
                    ));
                }
                check_len(NAME, "leaf value", self.classes.len(), self.value[i].len())?;
                continue;
            }
            let in_range = |child: i64| child > 0 && (child as usize) < nodes;
            if !in_range(left) || !in_range(right) {
                return Err(PipelineError::invalid_artifact(
                    NAME,
                    format!("node {i} has a child out of range"),
                ));
            }
            if !(0..features).contains(&self.feature[i]) {
                return Err(PipelineError::invalid_artifact(
                    NAME,
                    format!("node {i} splits on unknown feature {}", self.feature[i]),
                ));
            }
        }
        Ok(())
    }
}

const NAME: &str = "model";

/// Index of the first maximum
fn argmax(weights: &[f64]) -> usize {
    weights
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best, max), (i, w)| {
            if *w > max { (i, *w) } else { (best, max) }
        })
        .0
}

impl Classifier {
    fn classes(&self) -> &[String] {
        match self {
            Self::LogisticRegression(m) => &m.classes,
            Self::DecisionTree(m) => &m.classes,
        }
    }

    /// Predict the class label for a row aligned to `feature_names_in`
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ShapeMismatch` if the row width differs from
    /// the fitted width, `PipelineError::SchemaMismatch` if the column order
    /// differs, and `PipelineError::NonFiniteInput` for NaN or infinite
    /// values.
    pub fn predict(&self, row: &NumericRow) -> Result<String, PipelineError> {
        let expected = self.feature_names_in();
        if row.len() != expected.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: expected.len(),
                actual: row.len(),
            });
        }
        row.ensure_columns(NAME, expected)?;
        if let Some(column) = row.first_non_finite() {
            return Err(PipelineError::NonFiniteInput(column.to_string()));
        }

        let x = row.values();
        let index = match self {
            Self::LogisticRegression(m) => m.predict_index(x),
            Self::DecisionTree(m) => m.predict_index(x)?,
        };
        Ok(self.classes()[index].clone())
    }
}

impl FittedArtifact for Classifier {
    const NAME: &'static str = NAME;

    fn validate(&self) -> Result<(), PipelineError> {
        match self {
            Self::LogisticRegression(m) => m.validate(),
            Self::DecisionTree(m) => m.validate(),
        }
    }

    fn feature_names_in(&self) -> &[String] {
        match self {
            Self::LogisticRegression(m) => &m.feature_names_in,
            Self::DecisionTree(m) => &m.feature_names_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        vec!["x".to_string(), "y".to_string()]
    }

    fn row(values: Vec<f64>) -> NumericRow {
        NumericRow::new(columns(), values).unwrap()
    }

    fn logistic() -> Classifier {
        Classifier::LogisticRegression(LogisticRegression {
            feature_names_in: columns(),
            classes: vec!["No".to_string(), "Yes".to_string()],
            coef: vec![1.0, -1.0],
            intercept: 0.0,
        })
    }

    /// Splits on x <= 0.5, then on y <= 2.0 in the right branch
    fn tree() -> Classifier {
        Classifier::DecisionTree(DecisionTree {
            feature_names_in: columns(),
            classes: vec!["No".to_string(), "Yes".to_string()],
            children_left: vec![1, -1, 3, -1, -1],
            children_right: vec![2, -1, 4, -1, -1],
            feature: vec![0, -2, 1, -2, -2],
            threshold: vec![0.5, -2.0, 2.0, -2.0, -2.0],
            value: vec![
                vec![5.0, 5.0],
                vec![4.0, 0.0],
                vec![1.0, 5.0],
                vec![0.0, 5.0],
                vec![1.0, 0.0],
            ],
        })
    }

    #[test]
    fn logistic_positive_score_predicts_second_class() {
        assert_eq!(logistic().predict(&row(vec![2.0, 1.0])).unwrap(), "Yes");
    }

    #[test]
    fn logistic_zero_score_predicts_first_class() {
        assert_eq!(logistic().predict(&row(vec![1.0, 1.0])).unwrap(), "No");
    }

    #[test]
    fn tree_left_leaf() {
        assert_eq!(tree().predict(&row(vec![0.5, 100.0])).unwrap(), "No");
    }

    #[test]
    fn tree_right_then_left_leaf() {
        assert_eq!(tree().predict(&row(vec![1.0, 2.0])).unwrap(), "Yes");
    }

    #[test]
    fn tree_right_then_right_leaf() {
        assert_eq!(tree().predict(&row(vec![1.0, 3.0])).unwrap(), "No");
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let narrow = NumericRow::new(vec!["x".to_string()], vec![1.0]).unwrap();
        assert_eq!(
            logistic().predict(&narrow).unwrap_err(),
            PipelineError::ShapeMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn predict_rejects_wrong_order() {
        let swapped =
            NumericRow::new(vec!["y".to_string(), "x".to_string()], vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            logistic().predict(&swapped).unwrap_err(),
            PipelineError::SchemaMismatch { .. }
        ));
    }

    #[test]
    fn predict_rejects_nan() {
        assert_eq!(
            tree().predict(&row(vec![f64::NAN, 1.0])).unwrap_err(),
            PipelineError::NonFiniteInput("x".to_string())
        );
    }

    #[test]
    fn validate_accepts_fixtures() {
        assert!(logistic().validate().is_ok());
        assert!(tree().validate().is_ok());
    }

    #[test]
    fn validate_rejects_three_class_logistic() {
        let Classifier::LogisticRegression(mut model) = logistic() else {
            unreachable!("fixture is logistic");
        };
        model.classes.push("Maybe".to_string());
        assert!(Classifier::LogisticRegression(model).validate().is_err());
    }

    #[test]
    fn validate_rejects_self_loop() {
        let Classifier::DecisionTree(mut model) = tree() else {
            unreachable!("fixture is a tree");
        };
        model.children_left[2] = 0;
        let err = Classifier::DecisionTree(model).validate().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn validate_rejects_unknown_split_feature() {
        let Classifier::DecisionTree(mut model) = tree() else {
            unreachable!("fixture is a tree");
        };
        model.feature[0] = 7;
        assert!(Classifier::DecisionTree(model).validate().is_err());
    }

    #[test]
    fn deserializes_tagged_kind() {
        let json = br#"{
            "kind": "logistic_regression",
            "feature_names_in": ["x", "y"],
            "classes": ["No", "Yes"],
            "coef": [0.1, 0.2],
            "intercept": -0.3
        }"#;
        let model = Classifier::from_json_slice(json).unwrap();
        assert!(matches!(model, Classifier::LogisticRegression(_)));
    }

    #[test]
    fn argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), 1);
        assert_eq!(argmax(&[2.0]), 0);
    }
}
