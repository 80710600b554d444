//! Request middleware
//!
//! Access logging for every request and conversion of handler panics into
//! 500 responses.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::errors::ErrorResponse;
use super::todo_routes::TodoState;
use crate::observability::{log_event_with_fields, Event, Logger};

/// Log method, path, status and latency of each request and count it
pub async fn log_requests(
    State(state): State<Arc<TodoState>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    state.metrics.increment_requests();
    let status = response.status().as_u16().to_string();
    let latency_us = started.elapsed().as_micros().to_string();
    log_event_with_fields(
        Event::RequestComplete,
        &[
            ("method", method.as_str()),
            ("path", &path),
            ("status", &status),
            ("latency_us", &latency_us),
        ],
    );

    response
}

/// Response used by the catch-panic layer
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    Logger::error(Event::HandlerPanicked.as_str(), &[("detail", &detail)]);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_panic_with_str() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handle_panic_with_other_payload() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
