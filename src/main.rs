//! todo-api entry point
//!
//! Parses arguments, runs the selected command, and exits non-zero with a
//! structured error line on failure. All logic lives in the CLI module.

use todo_api::cli;
use todo_api::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(
            Event::BootFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
