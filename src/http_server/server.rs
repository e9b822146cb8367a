//! # HTTP Server
//!
//! Serves the commerce API over in-memory stores.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use crate::observability::{ActivityLog, Logger, LoggerActivityLog};
use crate::rest_api::ApiState;
use crate::services::Stores;

/// HTTP server for the commerce API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server over `stores`, writing activity to the log
    pub fn new(config: HttpServerConfig, stores: &Stores) -> Self {
        Self::with_activity_log(config, stores, Arc::new(LoggerActivityLog))
    }

    pub fn with_activity_log(
        config: HttpServerConfig,
        stores: &Stores,
        activity: Arc<dyn ActivityLog>,
    ) -> Self {
        let state = Arc::new(ApiState::new(stores, activity));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<ApiState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
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

        Router::new()
            .merge(health_routes())
            .nest("/api", api_routes(state))
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

    /// Binds the configured host, which may be a name such as `localhost`
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind((self.config.host.as_str(), self.config.port)).await
    }

    /// Binds and serves until the listener fails
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let bound = listener.local_addr()?.to_string();
        Logger::info("SERVER_LISTENING", &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let server = HttpServer::new(HttpServerConfig::with_port(9100), &Stores::new());
        assert_eq!(server.socket_addr(), "127.0.0.1:9100");
    }

    #[tokio::test]
    async fn test_bind_resolves_host_names() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            port: 0,
            cors_origins: Vec::new(),
        };
        let server = HttpServer::new(config, &Stores::new());

        let listener = server.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
