//! CLI command implementations
//!
//! `validate`, `summary` and `province` print JSON to stdout and exit;
//! `serve` loads every dataset up front, then runs the HTTP server.

use std::sync::Arc;

use serde_json::json;

use super::args::{Command, DataArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use crate::dashboard::DashboardContext;
use crate::http_server::{AppState, HttpServer};
use crate::observability::{self, Event};

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
        Command::Serve { data, port } => serve(&data, port),
        Command::Validate { data } => validate(&data),
        Command::Summary { data } => summary(&data),
        Command::Province { adcode, data } => province(&adcode, &data),
    }
}

/// Resolves configuration, installs logging and builds the context.
fn boot(args: &DataArgs, port: Option<u16>) -> CliResult<(Config, DashboardContext)> {
    let config = Config::resolve(args, port)?;
    observability::init(config.log_format);

    tracing::info!(
        event = Event::ConfigLoaded.as_str(),
        data_dir = %config.data.data_path().display(),
        log_format = %config.log_format
    );

    let dashboard = DashboardContext::from_config(&config.data);
    Ok((config, dashboard))
}

/// Start the dashboard server
///
/// Missing or malformed datasets abort startup. Schema errors do not: the
/// report is served as-is and a warning is logged.
pub fn serve(args: &DataArgs, port: Option<u16>) -> CliResult<()> {
    let (config, dashboard) = boot(args, port)?;
    observability::log_event(Event::BootStart);

    dashboard.preload()?;

    let report = dashboard.schema_report()?;
    if !report.ok {
        tracing::warn!(
            errors = report.summary.errors,
            warnings = report.summary.warnings,
            "province dataset has schema errors, see /api/schema-report"
        );
    }

    let state = AppState::new(dashboard)
        .map_err(|e| CliError::serve_failed(format!("Failed to compile templates: {}", e)))?;
    let server = HttpServer::new(config.server, Arc::new(state));

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            observability::log_event(Event::ServeFailed);
            CliError::serve_failed(format!("HTTP server failed: {}", e))
        })
    })?;

    Ok(())
}

/// Print the validation report; fails with exit status 2 when not ok
pub fn validate(args: &DataArgs) -> CliResult<()> {
    let (_config, dashboard) = boot(args, None)?;

    let report = dashboard.schema_report()?;
    write_json(report.as_ref())?;

    if !report.ok {
        return Err(CliError::validation_failed(report.summary.errors));
    }
    Ok(())
}

/// Print the company summary
pub fn summary(args: &DataArgs) -> CliResult<()> {
    let (_config, dashboard) = boot(args, None)?;

    let summary = dashboard.company_summary()?;
    write_json(&summary)
}

/// Print one province, or the not-found body
pub fn province(adcode: &str, args: &DataArgs) -> CliResult<()> {
    let (_config, dashboard) = boot(args, None)?;

    match dashboard.province(adcode)? {
        Some(entry) => write_json(&entry),
        None => {
            write_json(&json!({ "error": "Province not found" }))?;
            Err(CliError::province_not_found(adcode))
        }
    }
}
