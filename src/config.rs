use crate::domain::params::{DaysBack, PostCount};
use crate::error::{Error, Result};
use crate::service::DatasetShape;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Prefix for environment overrides, e.g. `PULSE_SEER__APPLICATION__PORT`
pub const ENV_PREFIX: &str = "PULSE_SEER";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

/// Dataset sizes and randomness
///
/// Sizes are signed so that a negative override reaches validation instead of
/// failing deserialization with an opaque message.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationSettings {
    pub post_count: i64,
    pub sentiment_days: i64,
    /// Fixed seed for a reproducible dataset; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self::defaults(&environment)?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Builder holding only the built-in defaults
    pub fn defaults(
        environment: &str,
    ) -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("application.environment", environment)?
            .set_default("generation.post_count", 50)?
            .set_default("generation.sentiment_days", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")
    }

    /// Validated dataset sizes
    pub fn dataset_shape(&self) -> Result<DatasetShape> {
        let generation = &self.generation;

        let post_count = usize::try_from(generation.post_count)
            .ok()
            .and_then(|count| PostCount::try_new(count).ok())
            .ok_or_else(|| {
                Error::invalid_input(
                    "generation.post_count",
                    format!("{} is not between 0 and 10000", generation.post_count),
                )
            })?;

        let sentiment_days = DaysBack::try_new(generation.sentiment_days).map_err(|_| {
            Error::invalid_input(
                "generation.sentiment_days",
                format!("{} is not between 0 and 3650", generation.sentiment_days),
            )
        })?;

        Ok(DatasetShape {
            post_count,
            sentiment_days,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}
