use chrono::NaiveDateTime;

use super::conditions::condition_for;
use super::models::{
    CurrentConditions, HourlyForecastEntry, ProviderCurrent, ProviderHourly, ProviderResponse,
    WeatherReport,
};

const PROVIDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const HOUR_LABEL_FORMAT: &str = "%-I %p";

/// One hour of the provider's parallel arrays, after bounds checking
#[derive(Debug, Clone, Copy, PartialEq)]
struct HourlyRow<'a> {
    time: &'a str,
    temperature: f64,
    weather_code: i32,
    precip_prob: Option<i32>,
    is_day: Option<i32>,
}

/// Zip the hourly arrays into per-hour rows
///
/// Temperature and weather code are required: rows end at the shortest of
/// time, temperature and weather code, or at the first `null` in either of
/// the latter two. The optional arrays may be shorter; missing or `null`
/// slots come back as `None`.
fn hourly_rows(hourly: &ProviderHourly) -> impl Iterator<Item = HourlyRow<'_>> {
    hourly
        .time
        .iter()
        .zip(&hourly.temperature_2m)
        .zip(&hourly.weather_code)
        .enumerate()
        .map_while(move |(i, ((time, temperature), weather_code))| {
            Some(HourlyRow {
                time,
                temperature: (*temperature)?,
                weather_code: (*weather_code)?,
                precip_prob: hourly.precipitation_probability.get(i).copied().flatten(),
                is_day: hourly.is_day.get(i).copied().flatten(),
            })
        })
}

/// Format a provider timestamp as a 12-hour label, e.g. "3 PM"
///
/// Unparseable timestamps are returned unchanged.
fn hour_label(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, PROVIDER_TIME_FORMAT) {
        Ok(parsed) => parsed.format(HOUR_LABEL_FORMAT).to_string(),
        Err(e) => {
            tracing::debug!(timestamp = %timestamp, error = %e, "Unparseable hourly timestamp");
            timestamp.to_string()
        }
    }
}

fn current_conditions(current: ProviderCurrent) -> CurrentConditions {
    let is_day = current.is_day == 1;
    let condition = condition_for(current.weather_code, is_day);

    CurrentConditions {
        temperature: current.temperature_2m,
        feels_like: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        wind_direction: current.wind_direction_10m,
        weather_code: current.weather_code,
        is_day,
        precipitation: current.precipitation,
        cloud_cover: current.cloud_cover,
        last_updated: current.time,
        condition: condition.label.to_string(),
        condition_emoji: condition.emoji.to_string(),
    }
}

fn hourly_entry(row: HourlyRow<'_>) -> HourlyForecastEntry {
    let is_day = row.is_day == Some(1);

    HourlyForecastEntry {
        time: row.time.to_string(),
        hour: hour_label(row.time),
        temperature: row.temperature,
        weather_code: row.weather_code,
        condition_emoji: condition_for(row.weather_code, is_day).emoji.to_string(),
        precip_prob: row.precip_prob.unwrap_or(0),
        is_day,
    }
}

/// Reshape a raw provider response into display-ready data
///
/// Never fails: short or missing hourly arrays produce a shorter forecast or
/// default field values.
pub fn normalize(response: ProviderResponse) -> WeatherReport {
    let hourly: Vec<HourlyForecastEntry> = hourly_rows(&response.hourly)
        .map(hourly_entry)
        .collect();

    if hourly.len() < response.hourly.time.len() {
        tracing::warn!(
            timestamps = response.hourly.time.len(),
            temperatures = response.hourly.temperature_2m.len(),
            weather_codes = response.hourly.weather_code.len(),
            kept = hourly.len(),
            "Hourly forecast truncated at a short or null required array"
        );
    }

    WeatherReport {
        current: current_conditions(response.current),
        hourly,
    }
}
