//! Configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use crate::{Error, Result};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch
    Json,
    /// Human-readable, for local runs
    Text,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(Error::Config(format!("Unsupported LOG_FORMAT: {}", other))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Deployment environment name
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::Json,
        };

        Ok(Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format,
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        })
    }
}
