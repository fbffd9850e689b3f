//! Dataset API Routes
//!
//! JSON endpoints over the loaded datasets, plus the province panel
//! fragment.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::error::AppError;
use super::state::AppState;
use crate::dashboard::CompanyProfiles;
use crate::schema::ValidationReport;
use crate::views::ProvincePanel;

/// Create dataset API routes
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/provinces", get(get_provinces))
        .route("/province/:adcode", get(get_province))
        .route("/schema-report", get(get_schema_report))
        .route("/company-profiles", get(get_company_profiles))
        .with_state(state)
}

/// Full province mapping
async fn get_provinces(State(state): State<Arc<AppState>>) -> Result<Json<Arc<Value>>, AppError> {
    Ok(Json(state.dashboard.provinces()?))
}

/// Province side panel as an HTML fragment.
///
/// Any key present in the dataset is served, whatever its shape; an entry
/// that is not an object renders a panel with only the adcode.
async fn get_province(
    State(state): State<Arc<AppState>>,
    Path(adcode): Path<String>,
) -> Result<Html<String>, AppError> {
    let entry = state
        .dashboard
        .province(&adcode)?
        .ok_or_else(|| AppError::NotFound("Province not found".into()))?;

    let panel = match entry.view() {
        Some(province) => ProvincePanel::from(&province),
        None => ProvincePanel::placeholder(&adcode),
    };

    Ok(Html(state.views.render_province_panel(&panel)?))
}

/// Validation report of the province dataset
async fn get_schema_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Arc<ValidationReport>>, AppError> {
    Ok(Json(state.dashboard.schema_report()?))
}

/// Both company lists with their summary
async fn get_company_profiles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompanyProfiles>, AppError> {
    Ok(Json(state.dashboard.company_profiles()?))
}
