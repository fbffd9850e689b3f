//! Configuration file
//!
//! Every field has a default, so the file itself is optional:
//!
//! ```json
//! {
//!   "data": { "data_dir": "./data" },
//!   "server": { "port": 8000, "static_dir": "./static" },
//!   "log_format": "json"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::args::DataArgs;
use super::errors::{CliError, CliResult};
use crate::data::DataConfig;
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset locations
    #[serde(default)]
    pub data: DataConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Log output format (optional, default "pretty")
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration: the file named by `--config`
    /// (or defaults), then command-line overrides.
    pub fn resolve(args: &DataArgs, port: Option<u16>) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(data_dir) = &args.data_dir {
            config.data.data_dir = data_dir.clone();
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.data.validate().map_err(CliError::config_error)?;
        self.server.validate().map_err(CliError::config_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = Config::resolve(&DataArgs::default(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("provmap.json");
        fs::write(&path, r#"{"server": {"port": 9100}, "log_format": "json"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("provmap.json");
        fs::write(&path, r#"{"data": {"data_dir": "/from/file"}, "server": {"port": 9100}}"#).unwrap();

        let args = DataArgs {
            config: Some(path),
            data_dir: Some(PathBuf::from("/from/flag")),
        };
        let config = Config::resolve(&args, Some(9200)).unwrap();
        assert_eq!(config.data.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("provmap.json");

        fs::write(&path, r#"{"server": {"port": 0}}"#).unwrap();
        assert!(Config::load(&path).is_err());

        fs::write(&path, r#"{"log_format": "xml"}"#).unwrap();
        assert!(Config::load(&path).is_err());

        fs::write(&path, "{").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/provmap.json")).unwrap_err();
        assert_eq!(err.code_str(), "PROVMAP_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_port_override_validated() {
        assert!(Config::resolve(&DataArgs::default(), Some(0)).is_err());
    }
}
