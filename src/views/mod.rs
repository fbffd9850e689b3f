//! HTML views
//!
//! Tera templates are embedded at compile time, so the binary does not
//! depend on a templates directory at runtime.

mod panel;

pub use panel::{FabRow, MetricRow, ProvincePanel};

use tera::{Context, Tera};
use thiserror::Error;

const MAP_TEMPLATE: &str = "map.html";
const PANEL_TEMPLATE: &str = "partials/province_panel.html";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Template rendering error: {0}")]
    Render(String),
}

impl From<tera::Error> for ViewError {
    fn from(e: tera::Error) -> Self {
        // The top-level tera message rarely names the failing variable
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ViewError::Render(message)
    }
}

/// Renders the map page and province panel fragments
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compiles the embedded templates.
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (MAP_TEMPLATE, include_str!("../../templates/map.html")),
            (
                PANEL_TEMPLATE,
                include_str!("../../templates/partials/province_panel.html"),
            ),
        ])
        .map_err(|e| ViewError::Template(e.to_string()))?;

        Ok(Self { tera })
    }

    /// Full map page
    pub fn render_map(&self) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("version", env!("CARGO_PKG_VERSION"));
        Ok(self.tera.render(MAP_TEMPLATE, &context)?)
    }

    /// Side panel fragment for one province
    pub fn render_province_panel(&self, panel: &ProvincePanel) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("adcode", &panel.adcode);
        context.insert("province", panel);
        Ok(self.tera.render(PANEL_TEMPLATE, &context)?)
    }
}
