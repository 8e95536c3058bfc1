//! Route definitions

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
