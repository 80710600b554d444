//! todo-api - in-memory todo list served over HTTP
//!
//! - [`store`]: the record store and its operations
//! - [`http_server`]: axum routes mapping HTTP requests onto the store
//! - [`observability`]: structured logging and counters
//! - [`cli`]: command-line entry points

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
