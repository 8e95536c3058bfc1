//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Domain-level error, e.g. a forecast too short to build a record
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather provider failed or returned an unusable response
    #[error("Weather API error: {0}")]
    WeatherApi(String),

    /// Input columns did not match what a fitted artifact expects
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Preprocessing or classification failed
    #[error("Prediction failed: {0}")]
    Prediction(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Short stable name of the error kind, used as a log field
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain",
            Self::WeatherApi(_) => "weather_api",
            Self::SchemaMismatch(_) => "schema_mismatch",
            Self::Prediction(_) => "prediction",
            Self::Internal(_) => "internal",
        }
    }
}
