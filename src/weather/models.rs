use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Open-Meteo Forecast Response (Internal)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    pub current: ProviderCurrent,
    #[serde(default)]
    pub hourly: ProviderHourly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCurrent {
    pub time: String,
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: i32,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: i32,
    pub weather_code: i32,
    pub is_day: i32,
    pub precipitation: f64,
    pub cloud_cover: i32,
}

/// Hourly block as parallel arrays, indexed by position
///
/// The arrays are not guaranteed to have equal lengths, and any slot may be
/// `null` (Open-Meteo sends `null` for hours it has no value for).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderHourly {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<i32>>,
    #[serde(default)]
    pub is_day: Vec<Option<i32>>,
}

// ============================================================================
// API Response Models (External - what we return to clients)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i32,
    pub wind_speed: f64,
    /// Degrees, meteorological convention (direction the wind blows from)
    pub wind_direction: i32,
    pub weather_code: i32,
    pub is_day: bool,
    pub precipitation: f64,
    pub cloud_cover: i32,
    /// Provider observation time, local to the configured time zone
    pub last_updated: String,
    pub condition: String,
    pub condition_emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecastEntry {
    /// Raw provider timestamp (`YYYY-MM-DDTHH:MM`)
    pub time: String,
    /// Display label such as "3 PM"
    pub hour: String,
    pub temperature: f64,
    pub weather_code: i32,
    pub condition_emoji: String,
    pub precip_prob: i32,
    pub is_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecastEntry>,
}
