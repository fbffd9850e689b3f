//! Dashboard context
//!
//! [`DashboardContext`] is built once at startup and shared with every
//! request handler. It owns the dataset loader and the report cache, so
//! "compute once" state lives in one explicit object instead of globals.

mod context;
mod report_cache;

pub use context::{CompanyProfiles, DashboardContext, ProvinceEntry};
pub use report_cache::ReportCache;
