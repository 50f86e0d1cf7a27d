//! # HTTP Server Module
//!
//! Axum server exposing the calculator.
//!
//! # Endpoints
//!
//! - `POST /calcular` - Perform a calculation
//! - `GET /health` - Health check

pub mod address;
pub mod calculator_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod shutdown;

pub use calculator_routes::CALCULATE_PATH;
pub use config::HttpServerConfig;
pub use errors::CalcRejection;
pub use server::HttpServer;
pub use shutdown::{spawn_console_watcher, wait_for_shutdown};
