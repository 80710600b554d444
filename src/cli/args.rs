//! CLI argument definitions using clap
//!
//! Commands:
//! - todo-api serve [--config <path>] [--host <host>] [--port <port>] [--empty]
//! - todo-api config [--config <path>] [--host <host>] [--port <port>] [--empty]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// todo-api - in-memory todo list over HTTP
#[derive(Parser, Debug)]
#[command(name = "todo-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServerArgs),

    /// Print the resolved configuration as JSON and exit
    Config(ServerArgs),
}

/// Settings shared by every command. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Start with no todos instead of the built-in four
    #[arg(long)]
    pub empty: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
