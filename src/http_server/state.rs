//! Shared handler state

use crate::dashboard::DashboardContext;
use crate::views::{ViewError, Views};

/// State shared across all handlers
pub struct AppState {
    pub dashboard: DashboardContext,
    pub views: Views,
}

impl AppState {
    /// Compiles the views; fails only on a broken embedded template.
    pub fn new(dashboard: DashboardContext) -> Result<Self, ViewError> {
        Ok(Self {
            dashboard,
            views: Views::new()?,
        })
    }
}
