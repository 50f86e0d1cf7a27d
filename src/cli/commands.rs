//! CLI command implementations

use std::io::{self, Read, Write};
use std::path::Path;

use crate::calculator::{Calculator, Language};
use crate::http_server::{spawn_console_watcher, wait_for_shutdown, HttpServer};
use crate::observability::{init_logging, Event, LogTarget};

use super::args::{Command, ServeOverrides};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_body, write_json};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, overrides } => serve(&config, &overrides),
        Command::Calc { config, language } => calc(&config, language),
    }
}

/// Start the HTTP server
///
/// Startup sequence:
/// 1. Configuration load and overrides
/// 2. Logging
/// 3. Listener bind
/// 4. Serve until Ctrl-C, SIGTERM or console `0`
pub fn serve(config_path: &Path, overrides: &ServeOverrides) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    config.apply_overrides(overrides)?;

    init_logging(&config.logging, LogTarget::Stdout)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    tracing::info!(
        event = %Event::BootStart,
        version = env!("CARGO_PKG_VERSION"),
        "starting calculadora"
    );
    tracing::info!(
        event = %Event::ConfigLoaded,
        path = %config_path.display(),
        addr = %config.http.socket_addr(),
        language = %config.language,
        console_shutdown = config.console_shutdown,
        "configuration loaded"
    );

    let calculator = Calculator::new(config.language);
    let server = HttpServer::with_config(config.http.clone(), calculator);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    let language = config.language;
    let console = config
        .console_shutdown
        .then(|| spawn_console_watcher(language));

    rt.block_on(async {
        server
            .start(wait_for_shutdown(console))
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Evaluate one request body from stdin
///
/// Prints the same JSON body the HTTP endpoint would return. A rejected
/// calculation is reported as an error so the process exits non-zero.
pub fn calc(config_path: &Path, language: Option<Language>) -> CliResult<()> {
    let config = Config::load(config_path)?;

    // Logs go to stderr so stdout carries only the response body
    init_logging(&config.logging, LogTarget::Stderr)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let calculator = Calculator::new(language.unwrap_or(config.language));
    calc_with(&calculator, io::stdin().lock(), &mut io::stdout())
}

/// Evaluate the body read from `reader` and write the response to `writer`
pub(crate) fn calc_with<R: Read, W: Write>(
    calculator: &Calculator,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    let body = read_body(reader)?;

    match calculator.handle(&body) {
        Ok(result) => write_json(writer, &result),
        Err(err) => {
            write_json(writer, &calculator.error_response(err))?;
            Err(CliError::calculation_rejected(err.code()))
        }
    }
}
