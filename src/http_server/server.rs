//! # HTTP Server
//!
//! Combines the todo and observability routers, wraps them in the request
//! middleware and serves them until Ctrl-C.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use super::config::HttpServerConfig;
use super::middleware::{handle_panic, log_requests};
use super::observability_routes::observability_routes;
use super::todo_routes::{todo_routes, TodoState};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::TodoStore;

/// HTTP server for the todo API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<TodoState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = if config.seed {
            let store = TodoStore::seeded();
            let count = store.len().to_string();
            log_event_with_fields(Event::StoreSeeded, &[("todos", &count)]);
            store
        } else {
            TodoStore::new()
        };
        Self::with_state(config, Arc::new(TodoState::new(store)))
    }

    /// Create a server around existing state
    pub fn with_state(config: HttpServerConfig, state: Arc<TodoState>) -> Self {
        let router = Self::build_router(state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    fn build_router(state: Arc<TodoState>) -> Router {
        Router::new()
            .merge(todo_routes(state.clone()))
            .merge(observability_routes(state.clone()))
            // Inner: panics become 500s before the access log sees them
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn_with_state(state, log_requests))
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state (for inspection in tests)
    pub fn state(&self) -> Arc<TodoState> {
        self.state.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let local_addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", &local_addr)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
