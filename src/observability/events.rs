//! Observable events
//!
//! Every log line the service writes names one of these.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    BootStart,
    ConfigLoaded,
    StoreSeeded,
    Serving,
    ShutdownStart,
    ShutdownComplete,
    BootFailed,

    // Requests
    RequestComplete,
    HandlerPanicked,

    // Store
    TodoCreated,
    TodoDeleted,
    TodoUpdated,
    TodoNotFound,
    MalformedBody,
    PatchWithoutDone,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "TODO_API_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "TODO_API_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "BOOT_FAILED",

            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::HandlerPanicked => "HANDLER_PANICKED",

            Event::TodoCreated => "TODO_CREATED",
            Event::TodoDeleted => "TODO_DELETED",
            Event::TodoUpdated => "TODO_UPDATED",
            Event::TodoNotFound => "TODO_NOT_FOUND",
            Event::MalformedBody => "MALFORMED_BODY",
            Event::PatchWithoutDone => "PATCH_WITHOUT_DONE",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// Per-request access lines, logged below INFO
    pub fn is_request_detail(&self) -> bool {
        matches!(self, Event::RequestComplete)
    }

    /// Client mistakes are worth a WARN, not an ERROR
    pub fn is_client_warning(&self) -> bool {
        matches!(
            self,
            Event::TodoNotFound | Event::MalformedBody | Event::PatchWithoutDone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::StoreSeeded,
            Event::Serving,
            Event::ShutdownStart,
            Event::ShutdownComplete,
            Event::BootFailed,
            Event::RequestComplete,
            Event::HandlerPanicked,
            Event::TodoCreated,
            Event::TodoDeleted,
            Event::TodoUpdated,
            Event::TodoNotFound,
            Event::MalformedBody,
            Event::PatchWithoutDone,
        ];

        let mut names: Vec<_> = events.iter().map(Event::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), events.len());
    }

    #[test]
    fn test_only_boot_failure_is_fatal() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::TodoNotFound.is_fatal());
        assert!(Event::TodoNotFound.is_client_warning());
        assert!(Event::RequestComplete.is_request_detail());
        assert!(!Event::TodoCreated.is_request_detail());
    }
}
