//! CLI-specific error types
//!
//! All CLI errors end the process; `exit_code` says with which status.

use std::fmt;
use std::io;

use crate::data::DataError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, runtime)
    IoError,
    /// Dataset missing, unreadable or malformed
    DataError,
    /// Province dataset has schema errors
    ValidationFailed,
    /// Lookup found nothing
    NotFound,
    /// Server failed to start or stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PROVMAP_CLI_CONFIG_ERROR",
            Self::IoError => "PROVMAP_CLI_IO_ERROR",
            Self::DataError => "PROVMAP_CLI_DATA_ERROR",
            Self::ValidationFailed => "PROVMAP_CLI_VALIDATION_FAILED",
            Self::NotFound => "PROVMAP_CLI_NOT_FOUND",
            Self::ServeFailed => "PROVMAP_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Validation report is not ok
    pub fn validation_failed(errors: usize) -> Self {
        Self::new(
            CliErrorCode::ValidationFailed,
            format!("Province dataset has {} schema error(s)", errors),
        )
    }

    /// Province lookup found nothing
    pub fn province_not_found(adcode: &str) -> Self {
        Self::new(
            CliErrorCode::NotFound,
            format!("Province '{}' not found", adcode),
        )
    }

    /// Server failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self.code {
            CliErrorCode::ValidationFailed => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<DataError> for CliError {
    fn from(e: DataError) -> Self {
        Self::new(CliErrorCode::DataError, format!("[{}] {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
