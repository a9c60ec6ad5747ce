//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};
use crate::{Error, Result};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(config: &Config) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| Error::Config(format!("Invalid LOG_LEVEL: {}", e))),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))
}
