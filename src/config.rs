use chrono_tz::Tz;
use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Hostname shown in the page footer
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Database URL (SQLite connection string)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Open-Meteo forecast endpoint
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Upper bound on a single provider request
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Number of hourly entries requested from the provider
    #[serde(default = "default_forecast_hours")]
    pub forecast_hours: u32,

    /// Location the page reports on
    #[serde(default)]
    pub location: LocationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LocationConfig {
    /// Display name
    #[serde(default = "default_location_name")]
    pub name: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// IANA time zone name, used for provider timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

impl LocationConfig {
    /// Parsed time zone
    ///
    /// `AppConfig::load` runs `validate`, so the UTC fallback only triggers for
    /// configs built without it.
    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or_else(|e| {
            tracing::warn!(
                timezone = %self.timezone,
                error = %e,
                "Unknown time zone, falling back to UTC"
            );
            Tz::UTC
        })
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_database_url() -> String {
    "sqlite:data/stoop-weather.db".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_provider_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_forecast_hours() -> u32 {
    24
}

// Brooklyn, NY
fn default_location_name() -> String {
    "Brooklyn, NY".to_string()
}

fn default_latitude() -> f64 {
    40.6782
}

fn default_longitude() -> f64 {
    -73.9442
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default values
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .set_default("hostname", default_hostname())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with STOOP_)
            // e.g. STOOP_LOCATION__LATITUDE=40.7
            .add_source(
                Environment::with_prefix("STOOP")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the provider or the page cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let location = &self.location;

        if !(-90.0..=90.0).contains(&location.latitude) {
            return Err(ConfigError::Message(format!(
                "location.latitude out of range: {}",
                location.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&location.longitude) {
            return Err(ConfigError::Message(format!(
                "location.longitude out of range: {}",
                location.longitude
            )));
        }

        if location.timezone.parse::<Tz>().is_err() {
            return Err(ConfigError::Message(format!(
                "location.timezone is not a known IANA time zone: {}",
                location.timezone
            )));
        }

        if self.forecast_hours == 0 {
            return Err(ConfigError::Message(
                "forecast_hours must be at least 1".to_string(),
            ));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "fetch_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            hostname: default_hostname(),
            database_url: "sqlite::memory:".to_string(),
            static_dir: default_static_dir(),
            provider_url: default_provider_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            forecast_hours: default_forecast_hours(),
            location: LocationConfig::default(),
        }
    }
}
