use maud::{html, Markup};

use super::base::base;
use crate::weather::{compass_direction, CurrentConditions, HourlyForecastEntry, WeatherReport};

/// Everything the weather page needs to render
pub struct WeatherPage<'a> {
    pub hostname: &'a str,
    pub location: &'a str,
    /// Render time, RFC 3339
    pub now: &'a str,
    pub report: Option<&'a WeatherReport>,
    pub error: Option<&'a str>,
}

pub fn weather_page(page: &WeatherPage) -> Markup {
    let title = format!("Weather - {}", page.location);

    base(
        &title,
        html! {
            header {
                h1 { (page.location) }
            }

            @if let Some(error) = page.error {
                div class="error" role="alert" { (error) }
            }

            @if let Some(report) = page.report {
                (current_block(&report.current))
                (hourly_strip(&report.hourly))
            }

            footer {
                p class="muted" {
                    "Served by " (page.hostname) " at "
                    time datetime=(page.now) { (page.now) }
                }
                p class="muted" {
                    "Data: " a href="https://open-meteo.com/" { "Open-Meteo" }
                }
            }
        },
    )
}

fn current_block(current: &CurrentConditions) -> Markup {
    html! {
        section class="current" id="current-weather" {
            div class="current-main" {
                span class="emoji" { (current.condition_emoji) }
                span class="temperature" { (format!("{:.0}°F", current.temperature)) }
            }
            p class="condition" { (current.condition) }
            dl class="details" {
                dt { "Feels like" }
                dd { (format!("{:.0}°F", current.feels_like)) }
                dt { "Humidity" }
                dd { (current.humidity) "%" }
                dt { "Wind" }
                dd {
                    (format!("{:.0} mph ", current.wind_speed))
                    (compass_direction(current.wind_direction))
                }
                dt { "Precipitation" }
                dd { (format!("{:.2} in", current.precipitation)) }
                dt { "Cloud cover" }
                dd { (current.cloud_cover) "%" }
            }
            p class="muted" { "Updated " (current.last_updated) }
        }
    }
}

fn hourly_strip(hourly: &[HourlyForecastEntry]) -> Markup {
    html! {
        section class="hourly" id="hourly-forecast" {
            h2 { "Next " (hourly.len()) " hours" }
            @if hourly.is_empty() {
                p class="muted" { "No hourly forecast available." }
            } @else {
                ol class="hours" {
                    @for entry in hourly {
                        li class=(if entry.is_day { "hour day" } else { "hour night" }) {
                            span class="hour-label" { (entry.hour) }
                            span class="emoji" { (entry.condition_emoji) }
                            span class="temperature" { (format!("{:.0}°", entry.temperature)) }
                            @if entry.precip_prob > 0 {
                                span class="precip" { "💧 " (entry.precip_prob) "%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
