//! Shared fixtures for weather tests

use super::models::{ProviderCurrent, ProviderHourly, ProviderResponse};

/// Trimmed Open-Meteo forecast body for three hours
pub const SAMPLE_BODY: &str = r#"{
    "latitude": 40.67824,
    "longitude": -73.94418,
    "timezone": "America/New_York",
    "current_units": {"temperature_2m": "°F"},
    "current": {
        "time": "2024-03-15T14:45",
        "interval": 900,
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
        "time": ["2024-03-15T15:00", "2024-03-15T16:00", "2024-03-15T17:00"],
        "temperature_2m": [57.0, 56.0, 55.0],
        "weather_code": [2, 3, 61],
        "precipitation_probability": [10, 20, 30],
        "is_day": [1, 1, 1]
    }
}"#;

pub fn provider_current() -> ProviderCurrent {
    ProviderCurrent {
        time: "2024-03-15T14:45".to_string(),
        temperature_2m: 58.3,
        apparent_temperature: 55.1,
        relative_humidity_2m: 62,
        wind_speed_10m: 8.7,
        wind_direction_10m: 225,
        weather_code: 2,
        is_day: 1,
        precipitation: 0.0,
        cloud_cover: 40,
    }
}

pub fn provider_hourly(
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<i32>,
    precipitation_probability: Vec<Option<i32>>,
    is_day: Vec<Option<i32>>,
) -> ProviderHourly {
    ProviderHourly {
        time,
        temperature_2m: temperature_2m.into_iter().map(Some).collect(),
        weather_code: weather_code.into_iter().map(Some).collect(),
        precipitation_probability,
        is_day,
    }
}

/// Same data as [`SAMPLE_BODY`], already decoded
pub fn sample_response() -> ProviderResponse {
    ProviderResponse {
        current: provider_current(),
        hourly: provider_hourly(
            vec![
                "2024-03-15T15:00".to_string(),
                "2024-03-15T16:00".to_string(),
                "2024-03-15T17:00".to_string(),
            ],
            vec![57.0, 56.0, 55.0],
            vec![2, 3, 61],
            vec![Some(10), Some(20), Some(30)],
            vec![Some(1), Some(1), Some(1)],
        ),
    }
}
