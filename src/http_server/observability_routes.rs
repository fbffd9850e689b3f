//! Health route
//!
//! Reports liveness plus which datasets have been loaded so far. A
//! dataset that failed to load shows as `false` until a later request
//! reads it successfully.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::state::AppState;
use crate::data::ResourceId;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Resource name to loaded flag
    pub datasets: BTreeMap<&'static str, bool>,
}

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let loader = state.dashboard.loader();
    let datasets = ResourceId::ALL
        .into_iter()
        .map(|id| (id.as_str(), loader.is_loaded(id)))
        .collect();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        datasets,
    })
}
