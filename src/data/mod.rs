//! Data subsystem for provmap
//!
//! Loads the three static datasets (provinces, semiconductor companies,
//! AI company profiles) once and keeps them for the process lifetime.
//!
//! # Design Principles
//!
//! - Read once, never invalidated
//! - Cached values are immutable and shared through `Arc`
//! - Missing files and malformed JSON are hard failures
//! - List datasets of the wrong shape become empty lists

mod config;
mod errors;
mod loader;
mod source;
mod types;

pub use config::DataConfig;
pub use errors::{DataError, DataErrorCode, DataResult};
pub use loader::{as_list, DataLoader};
pub use source::{FileSource, MemorySource, ResourceId, ResourceSource};
pub use types::{json_type_name, Fab, Metric, Province};
