//! # Todo Store
//!
//! In-memory owner of the todo sequence and every operation that reads or
//! mutates it.
//!
//! Records are kept in insertion order. Lookups are linear scans over the
//! vector and always act on the first record whose id matches; ids are not
//! required to be unique, so a duplicate created later is shadowed by the
//! earlier one until that is deleted.
//!
//! The store never hands out a mutable reference into its storage. Callers
//! get owned copies, or the position of a record via [`TodoStore::position`].
//! If the record count ever grows large, an id-to-position map can replace
//! the scan in `position` without changing any signature here.

mod errors;
mod todo;

pub use errors::{StoreError, StoreResult};
pub use todo::Todo;

/// Ordered, in-memory collection of todos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records, in order
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Create a store holding the startup records
    pub fn seeded() -> Self {
        Self::from_todos(seed_todos())
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Index of the first record with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    /// Copy of the first record with the given id
    pub fn find_by_id(&self, id: &str) -> StoreResult<Todo> {
        self.position(id)
            .map(|idx| self.todos[idx].clone())
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Append a record at the end. No uniqueness check is made on the id.
    pub fn append(&mut self, todo: Todo) -> Todo {
        self.todos.push(todo.clone());
        todo
    }

    /// Remove the first record with the given id, keeping the order of the
    /// rest. Returns the removed record.
    pub fn delete_by_id(&mut self, id: &str) -> StoreResult<Todo> {
        let idx = self.position(id).ok_or_else(|| StoreError::not_found(id))?;
        Ok(self.todos.remove(idx))
    }

    /// Set the `done` flag of the first record with the given id and return
    /// the updated copy.
    pub fn set_done(&mut self, id: &str, done: bool) -> StoreResult<Todo> {
        let idx = self.position(id).ok_or_else(|| StoreError::not_found(id))?;
        let todo = &mut self.todos[idx];
        todo.done = done;
        Ok(todo.clone())
    }
}

/// The records every fresh process starts with
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new("1", "Learn Go", false),
        Todo::new("2", "Build a web app", false),
        Todo::new("3", "Destroy a web app", true),
        Todo::new("4", "Build an API in GO", false),
    ]
}
