//! Logging setup
//!
//! Installs the global `tracing` subscriber. The filter comes from
//! `RUST_LOG` when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "raincast_server=debug,tower_http=debug,info";

/// Build the filter from `RUST_LOG`, falling back to the default
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed, so tests may call it
/// repeatedly.
pub fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = match format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(format = %format, "Tracing initialized");
    }
}
