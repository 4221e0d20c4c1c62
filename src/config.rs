use crate::error::ConfigError;
use serde_derive::Deserialize;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

fn default_timeout_sec() -> u64 {
    10
}

fn default_max_concurrent_fetches() -> usize {
    1
}

#[derive(Deserialize, Debug, Clone)]
pub struct Aiseg2Config {
    pub host: String,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub use_https: bool,
    // per page fetch, including the digest handshake
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
    // how many per-circuit pages may be in flight at once
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

impl Aiseg2Config {
    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.host)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

pub(crate) fn load_aiseg_config() -> Result<Aiseg2Config, ConfigError> {
    let config = envy::prefixed("AISEG2_")
        .from_env::<Aiseg2Config>()
        .map_err(ConfigError::env_parse)?;
    if config.max_concurrent_fetches == 0 {
        return Err(ConfigError::invalid(
            "max_concurrent_fetches",
            "must be at least 1",
        ));
    }
    Ok(config)
}

#[derive(Deserialize, Debug)]
pub struct InfluxConfig {
    pub url: String,
    pub token: String,
    pub org: String,
    pub bucket: String,
}

pub fn load_influx_config() -> Result<InfluxConfig, ConfigError> {
    envy::prefixed("INFLUXDB_")
        .from_env::<InfluxConfig>()
        .map_err(ConfigError::env_parse)
}
