//! Rain prediction result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label the classifier emits for "rain tomorrow"
pub const RAIN_LABEL: &str = "Yes";

/// Outcome of one classifier run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainPrediction {
    /// Raw class label produced by the model
    pub label: String,
    /// Whether the label means rain
    pub will_rain: bool,
}

impl RainPrediction {
    /// Build a prediction from a class label
    ///
    /// Only the exact label `Yes` counts as rain.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let will_rain = label == RAIN_LABEL;
        Self { label, will_rain }
    }
}

impl fmt::Display for RainPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.will_rain {
            write!(f, "rain expected")
        } else {
            write!(f, "no rain expected")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_label_means_rain() {
        let prediction = RainPrediction::from_label("Yes");
        assert!(prediction.will_rain);
        assert_eq!(prediction.label, "Yes");
    }

    #[test]
    fn no_label_means_dry() {
        assert!(!RainPrediction::from_label("No").will_rain);
    }

    #[test]
    fn label_match_is_exact() {
        assert!(!RainPrediction::from_label("yes").will_rain);
        assert!(!RainPrediction::from_label("Yes ").will_rain);
    }

    #[test]
    fn display() {
        assert_eq!(RainPrediction::from_label("Yes").to_string(), "rain expected");
        assert_eq!(RainPrediction::from_label("No").to_string(), "no rain expected");
    }
}
