mod base;
mod weather_page;

pub use weather_page::{weather_page, WeatherPage};
