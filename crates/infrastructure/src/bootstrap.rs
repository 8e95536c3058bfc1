//! Startup phase
//!
//! Runs once before the listener binds: downloads missing artifacts, loads
//! them, and builds the services the HTTP layer shares across requests.

use std::sync::Arc;
use std::time::Duration;

use application::{ApplicationError, HealthService, RainForecastService};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::adapters::{RainClassifierAdapter, WeatherAdapter};
use crate::artifacts::{
    ArtifactError, ArtifactFetcher, ArtifactKind, ArtifactLoader, ArtifactPaths, ArtifactSource,
    FetchReport,
};
use crate::config::AppConfig;
use crate::templates::{TemplateEngine, TemplateError};

/// Errors that stop the process from serving
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A setting is unusable
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// An artifact is missing or corrupt
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The page template does not compile
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A service could not be constructed
    #[error(transparent)]
    Service(#[from] ApplicationError),
}

/// Everything built at startup, immutable afterwards
#[derive(Debug)]
pub struct AppContext {
    pub rain_forecast: Arc<RainForecastService>,
    pub health: Arc<HealthService>,
    pub templates: Arc<TemplateEngine>,
    pub fetch_report: FetchReport,
}

/// Fetch and load artifacts, then wire adapters into services
///
/// # Errors
///
/// Returns `BootstrapError` if the configured location is invalid, an
/// artifact cannot be loaded, or the template fails to compile.
#[instrument(skip_all)]
pub async fn bootstrap(config: &AppConfig) -> Result<AppContext, BootstrapError> {
    let location = config
        .weather
        .location()
        .map_err(|e| BootstrapError::Configuration(e.to_string()))?;
    if config.prediction.location_label.trim().is_empty() {
        return Err(BootstrapError::Configuration(
            "prediction.location_label must not be empty".to_string(),
        ));
    }
    if !config.weather.has_api_key() {
        warn!("No weather API key configured (API_KEY); forecasts will fail");
    }

    let fetcher = ArtifactFetcher::new(Duration::from_secs(
        config.artifacts.download_timeout_secs,
    ))?;
    let sources = ArtifactSource::all_from_config(&config.artifacts);
    let fetch_report = fetcher.ensure_present(&sources).await;
    info!(
        downloaded = fetch_report.downloaded(),
        all_available = fetch_report.all_available(),
        "Artifact fetch complete"
    );

    let pipeline = ArtifactLoader::load(&ArtifactPaths::in_dir(&config.artifacts.dir))
        .await
        .inspect_err(|e| {
            error!(
                artifact = e.kind().as_ref().map_or("-", ArtifactKind::as_str),
                error = %e,
                "Artifact load failed"
            );
        })?;
    let classifier = Arc::new(RainClassifierAdapter::new(Arc::new(pipeline)));
    let weather = Arc::new(WeatherAdapter::with_config(
        config.weather.to_client_config(),
    )?);

    let rain_forecast = Arc::new(RainForecastService::new(
        weather.clone(),
        classifier.clone(),
        location,
        config.prediction.location_label.clone(),
    ));
    let health = Arc::new(HealthService::new(weather, classifier));
    let templates = Arc::new(TemplateEngine::with_config(config.templates.clone())?);

    info!(
        location = %location,
        label = %config.prediction.location_label,
        "Startup complete"
    );

    Ok(AppContext {
        rain_forecast,
        health,
        templates,
        fetch_report,
    })
}
