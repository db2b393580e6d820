//! # HTTP Server
//!
//! Binds the member routes, the unknown-route fallback, and CORS into
//! one router around an injected store.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::{Event, Logger};
use crate::store::MemberStore;

use super::config::ServerConfig;
use super::handlers::{create_member, list_members, route_not_found};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn MemberStore>,
}

/// HTTP server for the member records API
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server with default configuration
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self::with_config(ServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ServerConfig, store: Arc<dyn MemberStore>) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router around an injected store
    fn build_router(store: Arc<dyn MemberStore>) -> Router {
        let state = ApiState { store };

        // Permissive CORS for browser clients
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/members", get(list_members).post(create_member))
            .fallback(route_not_found)
            .layer(cors)
            .with_state(state)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {e}", self.config.socket_addr()),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        let port = self.config.port.to_string();
        Logger::event(
            Event::Serving,
            &[("host", self.config.host.as_str()), ("port", port.as_str())],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn memory_store() -> Arc<dyn MemberStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = ApiServer::new(memory_store());
        assert_eq!(server.socket_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_server_with_custom_config() {
        let server = ApiServer::with_config(ServerConfig::new("0.0.0.0", 8080), memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = ApiServer::new(memory_store());
        let _router = server.router();
    }
}
