use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use thiserror::Error;

use super::models::ProviderResponse;
use crate::config::LocationConfig;
use crate::error::HttpError;
use crate::impl_into_response;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,cloud_cover,wind_speed_10m,wind_direction_10m,is_day";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation_probability,is_day";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Weather API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode weather data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    /// Transport failures and non-success statuses, as opposed to bad bodies
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Status(_))
    }
}

impl HttpError for WeatherError {
    fn status_code(&self) -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }

    fn public_message(&self) -> &'static str {
        "Unable to fetch weather"
    }
}

impl_into_response!(WeatherError);

/// Source of raw forecast data
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions and the hourly block for the configured location
    async fn fetch(&self) -> Result<ProviderResponse, WeatherError>;
}

/// Open-Meteo forecast client for a single location
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    location: LocationConfig,
    forecast_hours: u32,
}

impl OpenMeteoClient {
    /// `client` is expected to carry the request timeout
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        location: LocationConfig,
        forecast_hours: u32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            location,
            forecast_hours,
        }
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", format!("{:.4}", self.location.latitude)),
            ("longitude", format!("{:.4}", self.location.longitude)),
            ("current", CURRENT_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("precipitation_unit", "inch".to_string()),
            ("timezone", self.location.timezone.clone()),
            ("forecast_hours", self.forecast_hours.to_string()),
        ]
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn fetch(&self) -> Result<ProviderResponse, WeatherError> {
        tracing::debug!(
            location = %self.location.name,
            lat = %self.location.latitude,
            lon = %self.location.longitude,
            "Fetching weather data"
        );

        // Query builder handles encoding of the time zone slash
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received Open-Meteo response");

        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.bytes().await?;
        let data: ProviderResponse = serde_json::from_slice(&body)?;

        tracing::info!(
            location = %self.location.name,
            temp = %data.current.temperature_2m,
            hours = data.hourly.time.len(),
            "Weather data fetched successfully"
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::test_support::SAMPLE_BODY;
    use axum::{extract::Query, routing::get, Router};
    use std::collections::HashMap;
    use std::time::Duration;

    async fn spawn_provider(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test provider");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}/v1/forecast", addr)
    }

    async fn spawn_static_provider(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/v1/forecast", get(move || async move { (status, body) }));
        spawn_provider(app).await
    }

    fn test_client(base_url: String, timeout: Duration) -> OpenMeteoClient {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        OpenMeteoClient::new(http, base_url, LocationConfig::default(), 24)
    }

    #[tokio::test]
    async fn test_fetch_decodes_payload() {
        let url = spawn_static_provider(StatusCode::OK, SAMPLE_BODY).await;
        let client = test_client(url, Duration::from_secs(10));

        let data = client.fetch().await.expect("fetch should succeed");
        assert_eq!(data.current.temperature_2m, 58.3);
        assert_eq!(data.current.is_day, 1);
        assert_eq!(data.hourly.time.len(), 3);
        assert_eq!(data.hourly.weather_code, vec![Some(2), Some(3), Some(61)]);
        assert_eq!(data.hourly.precipitation_probability[2], Some(30));
    }

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let app = Router::new().route(
            "/v1/forecast",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let expected = [
                    ("latitude", "40.6782"),
                    ("longitude", "-73.9442"),
                    ("current", CURRENT_FIELDS),
                    ("hourly", HOURLY_FIELDS),
                    ("temperature_unit", "fahrenheit"),
                    ("wind_speed_unit", "mph"),
                    ("precipitation_unit", "inch"),
                    ("timezone", "America/New_York"),
                    ("forecast_hours", "24"),
                ];
                let matches = expected
                    .iter()
                    .all(|(key, value)| params.get(*key).map(String::as_str) == Some(*value));
                if matches {
                    (StatusCode::OK, SAMPLE_BODY)
                } else {
                    (StatusCode::BAD_REQUEST, "unexpected query")
                }
            }),
        );
        let url = spawn_provider(app).await;
        let client = test_client(url, Duration::from_secs(10));

        assert!(client.fetch().await.is_ok());
    }

    #[tokio::test]
    async fn test_null_hourly_values_still_decode() {
        const BODY_WITH_NULLS: &str = r#"{
            "current": {
                "time": "2024-03-15T14:45",
                "temperature_2m": 58.3,
                "relative_humidity_2m": 62,
                "apparent_temperature": 55.1,
                "precipitation": 0.0,
                "weather_code": 2,
                "cloud_cover": 40,
                "wind_speed_10m": 8.7,
                "wind_direction_10m": 225,
                "is_day": 1
            },
            "hourly": {
                "time": ["2024-03-15T15:00", "2024-03-15T16:00"],
                "temperature_2m": [57.0, null],
                "weather_code": [null, 3],
                "precipitation_probability": [null, 20],
                "is_day": [1, null]
            }
        }"#;
        let url = spawn_static_provider(StatusCode::OK, BODY_WITH_NULLS).await;
        let client = test_client(url, Duration::from_secs(10));

        let data = client.fetch().await.expect("null slots should not fail the fetch");
        assert_eq!(data.hourly.temperature_2m, vec![Some(57.0), None]);
        assert_eq!(data.hourly.weather_code, vec![None, Some(3)]);
        assert_eq!(data.hourly.precipitation_probability, vec![None, Some(20)]);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_error() {
        let url = spawn_static_provider(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let client = test_client(url, Duration::from_secs(10));

        let err = client.fetch().await.expect_err("status 500 should fail");
        assert!(err.is_fetch());
        assert!(matches!(
            err,
            WeatherError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_empty_body_is_decode_error() {
        let url = spawn_static_provider(StatusCode::OK, "").await;
        let client = test_client(url, Duration::from_secs(10));

        let err = client.fetch().await.expect_err("empty body should fail");
        assert!(matches!(err, WeatherError::Decode(_)));
        assert!(!err.is_fetch());
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let url = spawn_static_provider(StatusCode::OK, r#"{"hourly": {}}"#).await;
        let client = test_client(url, Duration::from_secs(10));

        let err = client.fetch().await.expect_err("missing current block should fail");
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let app = Router::new().route(
            "/v1/forecast",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                SAMPLE_BODY
            }),
        );
        let url = spawn_provider(app).await;
        let client = test_client(url, Duration::from_millis(100));

        let err = client.fetch().await.expect_err("slow provider should time out");
        match err {
            WeatherError::Fetch(e) => assert!(e.is_timeout()),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_errors_map_to_service_unavailable() {
        let err = WeatherError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let decode = serde_json::from_str::<ProviderResponse>("").expect_err("empty json");
        let err = WeatherError::from(decode);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.public_message(), "Unable to fetch weather");
    }
}
