//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The forecast did not contain enough time steps to build a record
    #[error("Incomplete forecast: expected at least {required} entries, got {actual}")]
    IncompleteForecast { required: usize, actual: usize },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an incomplete forecast error
    pub const fn incomplete_forecast(required: usize, actual: usize) -> Self {
        Self::IncompleteForecast { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_forecast_creates_correct_error() {
        let err = DomainError::incomplete_forecast(3, 1);
        match err {
            DomainError::IncompleteForecast { required, actual } => {
                assert_eq!(required, 3);
                assert_eq!(actual, 1);
            },
            _ => unreachable!("Expected IncompleteForecast error"),
        }
    }

    #[test]
    fn incomplete_forecast_display() {
        let err = DomainError::incomplete_forecast(3, 0);
        let msg = err.to_string();
        assert!(msg.contains("at least 3"));
        assert!(msg.contains("got 0"));
    }

    #[test]
    fn validation_error_display() {
        let err = DomainError::ValidationError("empty location label".to_string());
        assert_eq!(err.to_string(), "Validation failed: empty location label");
    }
}
