use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::weather::{CurrentConditions, HourlyForecastEntry, WeatherReport};

/// OpenAPI documentation for the weather JSON endpoint
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stoop Weather API",
        version = "1.0.0",
        description = "Current conditions and a 24-hour forecast for one location, sourced from Open-Meteo.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    tags(
        (name = "weather", description = "Current weather and hourly forecast")
    ),
    components(
        schemas(
            WeatherReport,
            CurrentConditions,
            HourlyForecastEntry,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
