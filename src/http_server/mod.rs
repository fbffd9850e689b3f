//! # HTTP Server Module
//!
//! Serves the province map front end and its data API.
//!
//! # Endpoints
//!
//! - `/` - Map page
//! - `/health` - Health check and dataset load state
//! - `/api/provinces` - Full province mapping
//! - `/api/province/:adcode` - Province panel fragment
//! - `/api/schema-report` - Validation report
//! - `/api/company-profiles` - Company lists and summary
//! - `/static/*` - Front end assets

pub mod api_routes;
pub mod config;
pub mod error;
pub mod map_routes;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use error::AppError;
pub use server::{app, HttpServer};
pub use state::AppState;
