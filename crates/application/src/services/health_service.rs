//! Health aggregation service
//!
//! Readiness checks for the services a prediction depends on, with a
//! per-check timeout.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::{RainClassifierPort, WeatherPort};

/// Default timeout for each health check in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Status of an individual service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Optional additional information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Response time in milliseconds (if check was performed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy status with additional info
    #[must_use]
    pub fn healthy_with_info(info: impl Into<String>) -> Self {
        Self {
            healthy: true,
            info: Some(info.into()),
            response_time_ms: None,
            error: None,
        }
    }

    /// Create an unhealthy status
    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            info: None,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    /// Create an unhealthy status due to timeout
    #[must_use]
    pub fn timeout() -> Self {
        Self::unhealthy("Health check timed out")
    }

    /// Add response time to the status
    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Health report for all checked services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// True if every service is healthy
    pub healthy: bool,
    /// Individual service statuses, keyed by name
    pub services: BTreeMap<String, ServiceHealth>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    /// Create a new health report
    #[must_use]
    pub fn new(services: BTreeMap<String, ServiceHealth>) -> Self {
        let healthy = services.values().all(|s| s.healthy);

        Self {
            healthy,
            services,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Get status of a specific service
    #[must_use]
    pub fn service_status(&self, name: &str) -> Option<&ServiceHealth> {
        self.services.get(name)
    }
}

/// Service for aggregating readiness checks
pub struct HealthService {
    weather: Arc<dyn WeatherPort>,
    classifier: Arc<dyn RainClassifierPort>,
    check_timeout: Duration,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("weather", &"<WeatherPort>")
            .field("classifier", &"<RainClassifierPort>")
            .field("check_timeout", &self.check_timeout)
            .finish()
    }
}

impl HealthService {
    /// Create a new health service
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>, classifier: Arc<dyn RainClassifierPort>) -> Self {
        Self {
            weather,
            classifier,
            check_timeout: Duration::from_secs(DEFAULT_HEALTH_CHECK_TIMEOUT_SECS),
        }
    }

    /// Override the per-check timeout
    #[must_use]
    pub const fn with_timeout(mut self, check_timeout: Duration) -> Self {
        self.check_timeout = check_timeout;
        self
    }

    /// Check all services
    #[instrument(skip(self))]
    pub async fn check_all(&self) -> HealthReport {
        let mut services = BTreeMap::new();
        services.insert("model".to_string(), self.check_model());
        services.insert("weather".to_string(), self.check_weather().await);
        HealthReport::new(services)
    }

    /// The classifier is loaded before the server starts, so this only
    /// reports what was loaded.
    #[must_use]
    pub fn check_model(&self) -> ServiceHealth {
        ServiceHealth::healthy_with_info(format!(
            "{} features",
            self.classifier.feature_count()
        ))
    }

    /// Check weather service health
    #[instrument(skip(self))]
    pub async fn check_weather(&self) -> ServiceHealth {
        let start = Instant::now();

        let Ok(available) = timeout(self.check_timeout, self.weather.is_available()).await
        else {
            warn!("Weather health check timed out");
            return ServiceHealth::timeout();
        };

        let response_time = start.elapsed().as_millis() as u64;
        if available {
            debug!(response_time_ms = response_time, "Weather service healthy");
            ServiceHealth::healthy_with_info("openweathermap").with_response_time(response_time)
        } else {
            warn!(
                response_time_ms = response_time,
                "Weather service unhealthy"
            );
            ServiceHealth::unhealthy("Weather service unavailable")
                .with_response_time(response_time)
        }
    }
}
