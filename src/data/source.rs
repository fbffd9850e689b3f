//! Resource sources
//!
//! The loader only needs "resource id in, parsed JSON out". [`FileSource`]
//! reads from the configured data directory; [`MemorySource`] serves values
//! held in memory.

use std::collections::HashMap;
use std::fmt;
use std::fs;

use serde_json::Value;

use super::config::DataConfig;
use super::errors::{DataError, DataResult};

/// The datasets the dashboard serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// Province mapping keyed by adcode
    Provinces,
    /// Semiconductor company records
    SemiCompanies,
    /// AI company profile records
    AiCompanies,
}

impl ResourceId {
    pub const ALL: [ResourceId; 3] = [
        ResourceId::Provinces,
        ResourceId::SemiCompanies,
        ResourceId::AiCompanies,
    ];

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceId::Provinces => "provinces",
            ResourceId::SemiCompanies => "semi_companies",
            ResourceId::AiCompanies => "ai_companies",
        }
    }

    /// Whether the resource is served as a list of records
    pub fn is_list(&self) -> bool {
        !matches!(self, ResourceId::Provinces)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Something that can produce the parsed value of a resource
pub trait ResourceSource: Send + Sync {
    /// Reads and parses a resource. Called at most once per resource by
    /// [`super::DataLoader`] unless first accesses race.
    fn read(&self, id: ResourceId) -> DataResult<Value>;
}

/// Reads resources from JSON files under a data directory
#[derive(Debug, Clone)]
pub struct FileSource {
    config: DataConfig,
}

impl FileSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }
}

impl ResourceSource for FileSource {
    fn read(&self, id: ResourceId) -> DataResult<Value> {
        let path = self.config.path_for(id);

        let content = fs::read_to_string(&path).map_err(|e| DataError::FileAccess {
            resource: id,
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| DataError::Parse {
            resource: id,
            reason: e.to_string(),
        })
    }
}

/// Serves resources from values held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    values: HashMap<ResourceId, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a value for a resource, replacing any earlier one
    pub fn with(mut self, id: ResourceId, value: Value) -> Self {
        self.values.insert(id, value);
        self
    }
}

impl ResourceSource for MemorySource {
    fn read(&self, id: ResourceId) -> DataResult<Value> {
        self.values
            .get(&id)
            .cloned()
            .ok_or_else(|| DataError::FileAccess {
                resource: id,
                path: "<memory>".into(),
                reason: "resource not registered".into(),
            })
    }
}
