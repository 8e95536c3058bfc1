//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports, loads configuration, fetches and loads
//! the model artifacts, renders templates and wires everything together at
//! startup.

pub mod adapters;
pub mod artifacts;
pub mod bootstrap;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use self::adapters::{RainClassifierAdapter, WeatherAdapter};
pub use self::artifacts::{
    ArtifactError, ArtifactFetcher, ArtifactKind, ArtifactLoader, ArtifactPaths, ArtifactSource,
    FetchOutcome, FetchReport,
};
pub use self::bootstrap::{AppContext, BootstrapError, bootstrap};
pub use self::config::{
    AppConfig, ArtifactsAppConfig, PredictionConfig, ServerConfig, WeatherAppConfig,
};
pub use self::telemetry::init_tracing;
pub use self::templates::{IndexPage, TemplateConfig, TemplateEngine, TemplateError};
