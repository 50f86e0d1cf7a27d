//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use std::io;
use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse host and port into a bindable address
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid host '{}': {}", self.host, e),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Parse every configured CORS origin, failing on the first bad entry
    pub fn cors_origin_values(&self) -> io::Result<Vec<HeaderValue>> {
        self.cors_origins.iter().map(|o| parse_origin(o)).collect()
    }
}

/// An origin is an `http://` or `https://` URL usable as a header value
pub fn parse_origin(origin: &str) -> io::Result<HeaderValue> {
    let invalid = |reason: &str| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS origin '{}': {}", origin.escape_debug(), reason),
        )
    };

    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| invalid("scheme must be http or https"))?;
    if host.is_empty() || host.contains('/') {
        return Err(invalid("expected scheme://host[:port]"));
    }

    HeaderValue::from_str(origin).map_err(|e| invalid(&e.to_string()))
}
