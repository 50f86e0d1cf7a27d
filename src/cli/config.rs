//! Configuration file
//!
//! JSON, every field optional. A missing file means all defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculator::Language;
use crate::http_server::HttpServerConfig;
use crate::observability::LoggingConfig;

use super::args::ServeOverrides;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Language of client-facing error messages (default: en)
    #[serde(default)]
    pub language: Language,

    /// Stop the server when `0` is typed on stdin (default: true)
    #[serde(default = "default_console_shutdown")]
    pub console_shutdown: bool,
}

fn default_console_shutdown() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            logging: LoggingConfig::default(),
            language: Language::default(),
            console_shutdown: default_console_shutdown(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults if the file does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides, then re-validate
    pub fn apply_overrides(&mut self, overrides: &ServeOverrides) -> CliResult<()> {
        if let Some(host) = &overrides.host {
            self.http.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.http.port = port;
        }
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
        if overrides.no_console {
            self.console_shutdown = false;
        }

        self.validate()
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        self.http
            .bind_addr()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        self.http
            .cors_origin_values()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        self.logging
            .validate()
            .map_err(|e| CliError::config_error(e.message().to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::LogFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http.port, 5000);
        assert!(config.console_shutdown);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"{
                "http": {"host": "127.0.0.1", "port": 8081, "cors_origins": ["http://localhost:3000"]},
                "logging": {"level": "debug", "format": "json"},
                "language": "pt",
                "console_shutdown": false
            }"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.http.cors_origins.len(), 1);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.language, Language::Pt);
        assert!(!config.console_shutdown);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config(r#"{"language": "pt"}"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.http, HttpServerConfig::default());
        assert!(config.console_shutdown);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let file = write_config("{ not json");
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "CALC_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_zero_port_rejected() {
        let file = write_config(r#"{"http": {"port": 0}}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_bad_host_rejected() {
        let file = write_config(r#"{"http": {"host": "not-an-ip"}}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_bad_cors_origin_rejected() {
        let file = write_config(r#"{"http": {"cors_origins": ["http://localhost:3000", "localhost:3000"]}}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "CALC_CLI_CONFIG_ERROR");
        assert!(err.message().contains("localhost:3000"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let file = write_config(r#"{"language": "fr"}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::default();
        let overrides = ServeOverrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(9090),
            language: Some(Language::Pt),
            log_format: Some(LogFormat::Json),
            no_console: true,
        };
        config.apply_overrides(&overrides).unwrap();
        assert_eq!(config.http.socket_addr(), "127.0.0.1:9090");
        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.console_shutdown);
    }

    #[test]
    fn test_empty_overrides_keep_values() {
        let mut config = Config::default();
        config.apply_overrides(&ServeOverrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut config = Config::default();
        let overrides = ServeOverrides {
            port: Some(0),
            ..Default::default()
        };
        assert!(config.apply_overrides(&overrides).is_err());
    }
}
