//! Observability for the todo service
//!
//! - Structured JSON logging, one line per event
//! - Typed lifecycle and request events
//! - Monotonic counters, exposed over HTTP at `/metrics`
//!
//! ```ignore
//! use todo_api::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::TodoCreated, &[("id", "5")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_client_warning() {
        Severity::Warn
    } else if event.is_request_detail() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log an event with no fields
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_for_event() {
        assert_eq!(severity_for(Event::BootFailed), Severity::Fatal);
        assert_eq!(severity_for(Event::PatchWithoutDone), Severity::Warn);
        assert_eq!(severity_for(Event::TodoCreated), Severity::Info);
        assert_eq!(severity_for(Event::RequestComplete), Severity::Trace);
    }

    #[test]
    fn test_log_event() {
        // Only checks that logging does not panic
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "8080")]);
    }
}
