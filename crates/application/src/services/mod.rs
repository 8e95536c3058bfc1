//! Application services (use cases)

mod health_service;
mod rain_forecast_service;

pub use health_service::{HealthReport, HealthService, ServiceHealth};
pub use rain_forecast_service::RainForecastService;
