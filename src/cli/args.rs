//! CLI argument definitions using clap
//!
//! Commands:
//! - provmap serve [--config <path>] [--data-dir <dir>] [--port <port>]
//! - provmap validate [--config <path>] [--data-dir <dir>]
//! - provmap summary [--config <path>] [--data-dir <dir>]
//! - provmap province <adcode> [--config <path>] [--data-dir <dir>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// provmap - China province semiconductor map dashboard
#[derive(Parser, Debug)]
#[command(name = "provmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where to find configuration and datasets
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dataset directory, overriding the configuration file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the dashboard HTTP server
    Serve {
        #[command(flatten)]
        data: DataArgs,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the province dataset and print the report
    Validate {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print the company summary
    Summary {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print one province by adcode
    Province {
        /// Administrative division code, e.g. 110000
        adcode: String,

        #[command(flatten)]
        data: DataArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
