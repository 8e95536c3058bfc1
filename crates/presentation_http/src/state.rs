//! Application state shared across handlers

use std::sync::Arc;

use application::{HealthService, RainForecastService};
use infrastructure::{AppContext, TemplateEngine};

/// Shared application state
///
/// Built once at startup and never mutated; cloning only bumps `Arc` counts.
#[derive(Clone)]
pub struct AppState {
    /// Weather fetch plus prediction
    pub rain_forecast: Arc<RainForecastService>,
    /// Readiness probes
    pub health: Arc<HealthService>,
    /// Page renderer
    pub templates: Arc<TemplateEngine>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("location", &self.rain_forecast.location_label())
            .finish_non_exhaustive()
    }
}

impl From<AppContext> for AppState {
    fn from(context: AppContext) -> Self {
        Self {
            rain_forecast: context.rain_forecast,
            health: context.health,
            templates: context.templates,
        }
    }
}
