//! CLI argument definitions using clap
//!
//! Commands:
//! - calculadora serve --config <path> [overrides]
//! - calculadora calc --config <path> [--language en|pt]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::calculator::Language;
use crate::observability::LogFormat;

/// Calculadora - HTTP calculator service
#[derive(Parser, Debug)]
#[command(name = "calculadora")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (optional, defaults apply if absent)
        #[arg(long, default_value = "./calculadora.json")]
        config: PathBuf,

        #[command(flatten)]
        overrides: ServeOverrides,
    },

    /// Evaluate one request body read from stdin and exit
    Calc {
        /// Path to configuration file (optional, defaults apply if absent)
        #[arg(long, default_value = "./calculadora.json")]
        config: PathBuf,

        /// Language of error messages (en, pt)
        #[arg(long)]
        language: Option<Language>,
    },
}

/// Command-line values that take precedence over the configuration file
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeOverrides {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Language of error messages (en, pt)
    #[arg(long)]
    pub language: Option<Language>,

    /// Log output format (text, json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Do not watch stdin for the stop command
    #[arg(long)]
    pub no_console: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
