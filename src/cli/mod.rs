//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the HTTP server
//! - calc: one-shot calculation from stdin

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, ServeOverrides};
pub use commands::{calc, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_body, write_json};
