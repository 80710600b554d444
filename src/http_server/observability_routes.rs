//! Observability HTTP Routes
//!
//! Health check and counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::todo_routes::TodoState;
use crate::observability::MetricsSnapshot;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub counters: MetricsSnapshot,
    /// Records currently held by the store
    pub todos: usize,
}

/// Create observability routes
pub fn observability_routes(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<TodoState>>) -> Json<MetricsResponse> {
    let todos = state.store.read().await.len();
    Json(MetricsResponse {
        counters: state.metrics.snapshot(),
        todos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_response_is_flat() {
        let state = TodoState::seeded();
        state.metrics.increment_created();

        let response = MetricsResponse {
            counters: state.metrics.snapshot(),
            todos: 4,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["todos_created"], 1);
        assert_eq!(json["todos"], 4);
    }
}
