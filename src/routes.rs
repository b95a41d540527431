use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::config::AppConfig;
use crate::openapi::swagger_ui;
use crate::weather::handlers as weather_handlers;
use crate::AppState;

/// Build the weather page and API routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(weather_handlers::weather_page))
        .route("/api/weather", get(weather_handlers::weather_api))
}

/// Build the complete application router
pub fn build_router(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .route("/health", get(weather_handlers::health))
        .merge(weather_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        // Swagger UI for API documentation
        .merge(swagger_ui())
}
