//! Log subscriber setup
//!
//! Installs the global `tracing` subscriber:
//! - `RUST_LOG` wins when set
//! - otherwise the configured filter (default `info`)
//! - human-readable text or one JSON object per line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Output format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unsupported log format '{}', expected 'text' or 'json'", other)),
        }
    }
}

/// Stream log lines are written to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard output (server mode)
    #[default]
    Stdout,
    /// Standard error, keeps stdout free for command output
    Stderr,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (default: text)
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Check that `level` is a valid filter directive
    pub fn validate(&self) -> ObservabilityResult<()> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            ObservabilityError::new(format!("Invalid log level '{}': {}", self.level, e))
        })?;
        Ok(())
    }

    fn filter(&self) -> ObservabilityResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|e| {
            ObservabilityError::new(format!("Invalid log level '{}': {}", self.level, e))
        })
    }
}

/// Install the global subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> ObservabilityResult<()> {
    let filter = config.filter()?;

    let result = match (config.format, target) {
        (LogFormat::Text, LogTarget::Stdout) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
        (LogFormat::Text, LogTarget::Stderr) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        (LogFormat::Json, LogTarget::Stdout) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .try_init(),
        (LogFormat::Json, LogTarget::Stderr) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("Failed to install subscriber: {}", e)))
}
