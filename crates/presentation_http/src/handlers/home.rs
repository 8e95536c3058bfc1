//! Home page handler

use axum::{extract::State, response::Html};
use infrastructure::IndexPage;
use tracing::{instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Render tomorrow's rain prediction
///
/// Prediction failures are part of the page and still answer 200. Only a
/// template that fails to render turns into a 500.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let label = state.rain_forecast.location_label();

    let page = match state.rain_forecast.predict().await {
        Ok(prediction) => IndexPage::prediction(label, prediction.will_rain),
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Prediction failed");
            IndexPage::error(label, e.to_string())
        },
    };

    let html = state.templates.render_index(&page)?;
    Ok(Html(html))
}
