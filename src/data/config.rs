//! Dataset location configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::source::ResourceId;

/// Where the datasets live on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the dataset files (default: "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Province mapping keyed by adcode
    #[serde(default = "default_provinces_file")]
    pub provinces_file: String,

    /// List of semiconductor company records
    #[serde(default = "default_semi_companies_file")]
    pub semi_companies_file: String,

    /// Object with a `companies` list of AI company profiles
    #[serde(default = "default_ai_companies_file")]
    pub ai_companies_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_provinces_file() -> String {
    "provinces.json".to_string()
}

fn default_semi_companies_file() -> String {
    "semi_companies.json".to_string()
}

fn default_ai_companies_file() -> String {
    "ai_company_profiles.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            provinces_file: default_provinces_file(),
            semi_companies_file: default_semi_companies_file(),
            ai_companies_file: default_ai_companies_file(),
        }
    }
}

impl DataConfig {
    /// Create a config with default file names under `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// File name configured for a resource
    pub fn file_name(&self, id: ResourceId) -> &str {
        match id {
            ResourceId::Provinces => &self.provinces_file,
            ResourceId::SemiCompanies => &self.semi_companies_file,
            ResourceId::AiCompanies => &self.ai_companies_file,
        }
    }

    /// Full path of a resource file
    pub fn path_for(&self, id: ResourceId) -> PathBuf {
        self.data_dir.join(self.file_name(id))
    }

    /// Data directory as Path
    pub fn data_path(&self) -> &Path {
        &self.data_dir
    }

    /// Rejects empty file names.
    pub fn validate(&self) -> Result<(), String> {
        for id in ResourceId::ALL {
            if self.file_name(id).trim().is_empty() {
                return Err(format!("File name for {} must not be empty", id));
            }
        }
        Ok(())
    }
}
