//! # HTTP Server
//!
//! Combines the map page, dataset API, health check and static assets
//! into one Axum router.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::map_routes::map_routes;
use super::observability_routes::health_routes;
use super::state::AppState;
use crate::observability::Event;

/// Routes without static assets or middleware
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes(Arc::clone(&state)))
        .merge(map_routes(Arc::clone(&state)))
        .nest("/api", api_routes(state))
}

/// HTTP Server for the province dashboard
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given state
    pub fn new(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        app(state)
            .nest_service("/static", ServeDir::new(&config.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            event = Event::Serving.as_str(),
            addr = %addr,
            static_dir = %self.config.static_dir.display()
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
