//! Data error types
//!
//! Error codes:
//! - PROVMAP_DATA_FILE_ACCESS: resource missing or unreadable
//! - PROVMAP_DATA_PARSE: resource content is not well-formed JSON
//! - PROVMAP_DATA_FORMAT: a record holds a value that cannot be interpreted

use std::fmt;

use thiserror::Error;

use super::source::ResourceId;

/// Data error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataErrorCode {
    FileAccess,
    Parse,
    Format,
}

impl DataErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DataErrorCode::FileAccess => "PROVMAP_DATA_FILE_ACCESS",
            DataErrorCode::Parse => "PROVMAP_DATA_PARSE",
            DataErrorCode::Format => "PROVMAP_DATA_FORMAT",
        }
    }
}

impl fmt::Display for DataErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while loading or interpreting datasets
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// Resource file missing or unreadable
    #[error("Failed to read {resource} from '{path}': {reason}")]
    FileAccess {
        resource: ResourceId,
        path: String,
        reason: String,
    },

    /// Resource content is not well-formed JSON
    #[error("Malformed JSON in {resource}: {reason}")]
    Parse { resource: ResourceId, reason: String },

    /// A record value cannot be interpreted (e.g. non-numeric revenue)
    #[error("Invalid record {index} in {group}: {reason}")]
    Format {
        group: String,
        index: usize,
        reason: String,
    },
}

impl DataError {
    /// Returns the error code
    pub fn code(&self) -> DataErrorCode {
        match self {
            DataError::FileAccess { .. } => DataErrorCode::FileAccess,
            DataError::Parse { .. } => DataErrorCode::Parse,
            DataError::Format { .. } => DataErrorCode::Format,
        }
    }

    /// Create a format error for a record
    pub fn format(group: impl Into<String>, index: usize, reason: impl Into<String>) -> Self {
        DataError::Format {
            group: group.into(),
            index,
            reason: reason.into(),
        }
    }
}

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;
