//! Observability events for provmap
//!
//! Every lifecycle event the dashboard logs is named here, so log
//! consumers can match on a fixed vocabulary.

use std::fmt;

/// Observable events in provmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Server bound and accepting requests
    Serving,
    /// Server failed to start or stopped with an error
    ServeFailed,

    // Data
    /// A dataset was read and parsed for the first time
    DatasetLoaded,
    /// A dataset could not be read or parsed
    DatasetFailed,
    /// A list dataset had an unexpected shape and was replaced by an empty list
    DatasetNormalized,

    // Schema report
    /// Validation report computed and cached
    ReportComputed,

    // Aggregation
    /// Company summary computed
    SummaryComputed,
    /// Company records without a revenue figure were counted as zero
    RevenueMissing,

    // Queries
    /// Province lookup found no entry
    ProvinceNotFound,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "PROVMAP_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "PROVMAP_SERVING",
            Event::ServeFailed => "PROVMAP_SERVE_FAILED",

            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetFailed => "DATASET_FAILED",
            Event::DatasetNormalized => "DATASET_NORMALIZED",

            Event::ReportComputed => "REPORT_COMPUTED",

            Event::SummaryComputed => "SUMMARY_COMPUTED",
            Event::RevenueMissing => "REVENUE_MISSING",

            Event::ProvinceNotFound => "PROVINCE_NOT_FOUND",
        }
    }

    /// Returns true if this event indicates a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ServeFailed | Event::DatasetFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
