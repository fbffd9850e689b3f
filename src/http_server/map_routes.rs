//! Map page route

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use super::error::AppError;
use super::state::AppState;

/// Create the map page route
pub fn map_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(map_page))
        .with_state(state)
}

async fn map_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.render_map()?))
}
