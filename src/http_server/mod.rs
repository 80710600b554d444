//! # HTTP Server Module
//!
//! Axum server exposing the todo store.
//!
//! # Endpoints
//!
//! - `GET /todos`, `POST /todos`
//! - `GET /todos/:id`, `DELETE /todos/:id`, `PATCH /todos/:id`
//! - `GET /health`, `GET /metrics`

pub mod config;
pub mod errors;
pub mod middleware;
pub mod observability_routes;
pub mod server;
pub mod todo_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use todo_routes::TodoState;
