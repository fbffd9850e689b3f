//! Cache-once dataset loader
//!
//! Each resource is read through the [`ResourceSource`] on first access and
//! kept in a `OnceLock` for the rest of the process. There is no
//! invalidation: the source files are static reference data.
//!
//! Concurrent first accesses may both read the source; only the value that
//! lands in the cell first is ever handed out.

use std::sync::{Arc, OnceLock};

use serde_json::Value;

use super::errors::DataResult;
use super::source::{ResourceId, ResourceSource};
use super::types::json_type_name;
use crate::observability::Event;

/// Loads and caches the dashboard datasets.
pub struct DataLoader {
    source: Box<dyn ResourceSource>,
    provinces: OnceLock<Arc<Value>>,
    semi_companies: OnceLock<Arc<Value>>,
    ai_companies: OnceLock<Arc<Value>>,
}

impl DataLoader {
    /// Creates a loader reading from the given source. Nothing is read yet.
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            provinces: OnceLock::new(),
            semi_companies: OnceLock::new(),
            ai_companies: OnceLock::new(),
        }
    }

    fn cell(&self, id: ResourceId) -> &OnceLock<Arc<Value>> {
        match id {
            ResourceId::Provinces => &self.provinces,
            ResourceId::SemiCompanies => &self.semi_companies,
            ResourceId::AiCompanies => &self.ai_companies,
        }
    }

    /// Returns the parsed value of a resource, reading it on first call.
    ///
    /// List resources are normalized to a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `FileAccess` or `Parse` errors from the source. Failures are
    /// not cached; the next call reads again.
    pub fn load(&self, id: ResourceId) -> DataResult<Arc<Value>> {
        let cell = self.cell(id);
        if let Some(value) = cell.get() {
            return Ok(Arc::clone(value));
        }

        let raw = self.source.read(id).map_err(|e| {
            tracing::error!(
                event = Event::DatasetFailed.as_str(),
                resource = id.as_str(),
                code = e.code().code(),
                error = %e
            );
            e
        })?;

        let value = Arc::new(normalize(id, raw));
        tracing::info!(
            event = Event::DatasetLoaded.as_str(),
            resource = id.as_str(),
            entries = entry_count(&value)
        );

        Ok(Arc::clone(cell.get_or_init(|| value)))
    }

    /// Province mapping keyed by adcode
    pub fn provinces(&self) -> DataResult<Arc<Value>> {
        self.load(ResourceId::Provinces)
    }

    /// Semiconductor company records, always an array
    pub fn semi_companies(&self) -> DataResult<Arc<Value>> {
        self.load(ResourceId::SemiCompanies)
    }

    /// AI company profile records, always an array
    pub fn ai_companies(&self) -> DataResult<Arc<Value>> {
        self.load(ResourceId::AiCompanies)
    }

    /// Whether a resource has already been loaded
    pub fn is_loaded(&self, id: ResourceId) -> bool {
        self.cell(id).get().is_some()
    }
}

/// Views a list resource as a slice; anything else is empty.
pub fn as_list(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn normalize(id: ResourceId, raw: Value) -> Value {
    if !id.is_list() {
        return raw;
    }

    let found = json_type_name(&raw);
    let normalized = match (id, raw) {
        (ResourceId::SemiCompanies, Value::Array(items)) => return Value::Array(items),
        (ResourceId::AiCompanies, Value::Object(mut map)) => match map.remove("companies") {
            Some(Value::Array(items)) => return Value::Array(items),
            _ => Value::Array(Vec::new()),
        },
        _ => Value::Array(Vec::new()),
    };

    tracing::warn!(
        event = Event::DatasetNormalized.as_str(),
        resource = id.as_str(),
        found,
        "unexpected dataset shape, serving an empty list"
    );
    normalized
}

fn entry_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}
