//! CLI module for todo-api
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - config: Print the resolved configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ServerArgs};
pub use commands::{load_config, resolve_config, run, run_command, serve, show_config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
