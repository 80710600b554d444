//! Request and store counters
//!
//! Counters only. They increase monotonically and reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by all handlers
///
/// Relaxed ordering is enough: counters are independent and only read for
/// reporting.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: AtomicU64,
    todos_created: AtomicU64,
    todos_deleted: AtomicU64,
    todos_updated: AtomicU64,
    not_found: AtomicU64,
    malformed_bodies: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.todos_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.todos_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.todos_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_malformed(&self) {
        self.malformed_bodies.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            todos_created: self.todos_created.load(Ordering::Relaxed),
            todos_deleted: self.todos_deleted.load(Ordering::Relaxed),
            todos_updated: self.todos_updated.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            malformed_bodies: self.malformed_bodies.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub todos_created: u64,
    pub todos_deleted: u64,
    pub todos_updated: u64,
    pub not_found: u64,
    pub malformed_bodies: u64,
}
