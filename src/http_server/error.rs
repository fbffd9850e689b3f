//! # API Error Types
//!
//! Maps data and view failures to HTTP responses. Not-found bodies carry
//! the message; 500-class bodies carry only a generic message and a code,
//! the cause is logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::data::DataError;
use crate::views::ViewError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Dataset could not be loaded or interpreted (500)
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Template rendering failed (500)
    #[error("view error: {0}")]
    View(#[from] ViewError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Data(_) | AppError::View(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Data(e) => e.code().code(),
            AppError::View(_) => "RENDER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // The front end matches on this exact body
            AppError::NotFound(message) => json!({ "error": message }),
            AppError::Data(_) | AppError::View(_) => {
                tracing::error!(code = self.code(), error = %self, "request failed");
                json!({ "error": "Internal server error", "code": self.code() })
            }
        };
        (status, Json(body)).into_response()
    }
}
