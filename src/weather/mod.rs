mod compass;
mod conditions;
pub mod handlers;
mod models;
mod normalize;
mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use compass::compass_direction;
pub use models::{CurrentConditions, HourlyForecastEntry, WeatherReport};
pub use normalize::normalize;
pub use service::{OpenMeteoClient, WeatherError, WeatherProvider};
