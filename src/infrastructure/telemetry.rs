//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level when present.

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| Error::invalid_input("logging.level", e)),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let filter = env_filter(settings)?;

    let installed = match settings.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    installed.map_err(|e| Error::internal(format!("tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str) -> LoggingSettings {
        LoggingSettings {
            level: level.to_string(),
            format: LogFormat::Pretty,
        }
    }

    #[test]
    fn test_configured_level_is_accepted() {
        assert!(env_filter(&logging("info")).is_ok());
        assert!(env_filter(&logging("pulse_seer=debug,tower=warn")).is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        let settings = logging("warn");
        let _ = init(&settings);
        assert!(init(&settings).is_err());
    }
}
