//! CLI module for provmap
//!
//! Provides command-line interface for:
//! - serve: Load datasets and run the HTTP server
//! - validate: Print the province schema report
//! - summary: Print the company summary
//! - province: Print one province

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, DataArgs};
pub use commands::{province, run, run_command, serve, summary, validate};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
