//! The todo record

use serde::{Deserialize, Serialize};

/// A single task.
///
/// The `id` is supplied by the caller and is never generated or validated
/// server-side. Missing fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub done: bool,
}

impl Todo {
    /// Create a new todo
    pub fn new(id: impl Into<String>, name: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            done,
        }
    }
}
