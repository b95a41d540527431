use axum::{extract::State, response::Html, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::{normalize, WeatherError, WeatherReport};
use crate::templates::{weather_page as render_weather_page, WeatherPage};
use crate::AppState;

const PAGE_ERROR_MESSAGE: &str = "Unable to fetch weather data. Please try again later.";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fetch from the provider and normalize, once per request
async fn load_report(state: &AppState) -> Result<WeatherReport, WeatherError> {
    let raw = state.provider.fetch().await?;
    Ok(normalize(raw))
}

/// HTML weather page
///
/// GET /
///
/// Provider failures are shown inline; this route never returns a 5xx.
pub async fn weather_page(State(state): State<AppState>) -> Html<String> {
    let now = Utc::now()
        .with_timezone(&state.config.location.tz())
        .to_rfc3339_opts(SecondsFormat::Secs, false);

    let result = load_report(&state).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, fetch = e.is_fetch(), "Failed to load weather for page");
    }

    let page = WeatherPage {
        hostname: &state.config.hostname,
        location: &state.config.location.name,
        now: &now,
        report: result.as_ref().ok(),
        error: result.as_ref().err().map(|_| PAGE_ERROR_MESSAGE),
    };

    Html(render_weather_page(&page).into_string())
}

/// Current conditions plus hourly forecast as JSON
///
/// GET /api/weather
pub async fn weather_api(
    State(state): State<AppState>,
) -> Result<Json<WeatherReport>, WeatherError> {
    let report = load_report(&state).await?;
    Ok(Json(report))
}
