//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::{Command, ServerArgs};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Load a configuration file. Absent keys take their defaults.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

fn validate(config: &HttpServerConfig) -> CliResult<()> {
    if config.host.trim().is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }
    Ok(())
}

/// Build the effective configuration: defaults, then the config file, then flags
pub fn resolve_config(args: &ServerArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.empty {
        config.seed = false;
    }

    validate(&config)?;
    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Config(args) => show_config(&args),
    }
}

/// Print the resolved configuration
pub fn show_config(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    write_json(&config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(args: &ServerArgs) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = resolve_config(args)?;
    let port = config.port.to_string();
    let seed = config.seed.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("host", &config.host), ("port", &port), ("seed", &seed)],
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        HttpServer::with_config(config)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(&ServerArgs::default()).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_file_then_flags() {
        let file = config_file(r#"{"host": "0.0.0.0", "port": 3000}"#);
        let args = ServerArgs {
            config: Some(file.path().to_path_buf()),
            port: Some(4000),
            empty: true,
            ..Default::default()
        };

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert!(!config.seed);
    }

    #[test]
    fn test_missing_file() {
        let args = ServerArgs {
            config: Some("/nonexistent/todo.json".into()),
            ..Default::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert_eq!(err.code_str(), "TODO_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let file = config_file("{ not json");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_empty_host_rejected() {
        let args = ServerArgs {
            host: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }
}
