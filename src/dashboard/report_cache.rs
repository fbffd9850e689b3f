//! Memoized validation report

use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::observability::Event;
use crate::schema::{self, ValidationReport};

/// Computes the validation report on first use and keeps it for the
/// process lifetime. There is no invalidation.
#[derive(Debug, Default)]
pub struct ReportCache {
    report: OnceLock<Arc<ValidationReport>>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached report, validating `provinces` if none exists yet.
    ///
    /// Once a report is cached, later calls ignore their argument.
    pub fn get_or_compute(&self, provinces: &Value) -> Arc<ValidationReport> {
        let report = self.report.get_or_init(|| {
            let report = schema::validate(provinces);
            tracing::info!(
                event = Event::ReportComputed.as_str(),
                ok = report.ok,
                provinces = report.summary.provinces,
                errors = report.summary.errors,
                warnings = report.summary.warnings
            );
            Arc::new(report)
        });
        Arc::clone(report)
    }

    /// The cached report, if computed
    pub fn get(&self) -> Option<Arc<ValidationReport>> {
        self.report.get().cloned()
    }
}
