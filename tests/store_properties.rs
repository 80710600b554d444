//! Record Store Property Tests
//!
//! Behaviour of the store operations independent of HTTP:
//! - Listing is stable without mutation
//! - Create then read returns what was created
//! - Delete removes exactly one record and keeps the rest in order
//! - Unknown ids are reported and never mutate the store
//! - Setting `done` touches nothing else

use todo_api::store::{StoreError, Todo, TodoStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn ids(store: &TodoStore) -> Vec<String> {
    store.list().iter().map(|t| t.id.clone()).collect()
}

fn count_with_id(store: &TodoStore, id: &str) -> usize {
    store.list().iter().filter(|t| t.id == id).count()
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_listing_is_idempotent() {
    let store = TodoStore::seeded();
    let first = store.list().to_vec();
    let second = store.list().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_listing_keeps_insertion_order() {
    let mut store = TodoStore::new();
    for id in ["b", "a", "c"] {
        store.append(Todo::new(id, "x", false));
    }
    assert_eq!(ids(&store), vec!["b", "a", "c"]);
}

// =============================================================================
// Create / Read
// =============================================================================

#[test]
fn test_create_then_read_round_trip() {
    let mut store = TodoStore::seeded();

    for (i, done) in [(10, false), (11, true), (12, false)] {
        let todo = Todo::new(i.to_string(), format!("task {i}"), done);
        store.append(todo.clone());
        assert_eq!(store.find_by_id(&todo.id).unwrap(), todo);
    }
}

#[test]
fn test_duplicate_create_is_accepted() {
    let mut store = TodoStore::seeded();
    store.append(Todo::new("2", "Second copy", true));

    assert_eq!(count_with_id(&store, "2"), 2);
    assert_eq!(store.find_by_id("2").unwrap().name, "Build a web app");
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_removes_exactly_one() {
    let mut store = TodoStore::seeded();
    store.append(Todo::new("3", "Duplicate", false));
    store.append(Todo::new("5", "Tail", false));

    let before: Vec<Todo> = store.list().to_vec();
    store.delete_by_id("3").unwrap();

    assert_eq!(count_with_id(&store, "3"), 1);

    // Everything except the first "3" is untouched and in order
    let mut expected = before;
    expected.remove(2);
    assert_eq!(store.list(), expected.as_slice());
}

// =============================================================================
// Not Found
// =============================================================================

#[test]
fn test_unknown_id_is_not_found_everywhere() {
    let mut store = TodoStore::seeded();
    let before = store.clone();
    let expected = StoreError::NotFound {
        id: "99".to_string(),
    };

    assert_eq!(store.find_by_id("99"), Err(expected.clone()));
    assert_eq!(store.delete_by_id("99"), Err(expected.clone()));
    assert_eq!(store.set_done("99", true), Err(expected));

    assert_eq!(store, before);
}

#[test]
fn test_empty_store_not_found() {
    let mut store = TodoStore::new();
    assert!(store.find_by_id("1").is_err());
    assert!(store.delete_by_id("1").is_err());
}

// =============================================================================
// Done Flag
// =============================================================================

#[test]
fn test_set_done_only_changes_done() {
    let mut store = TodoStore::seeded();
    let original = store.find_by_id("1").unwrap();

    let updated = store.set_done("1", true).unwrap();

    assert!(updated.done);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, original.name);

    // Other records are unaffected
    let others: Vec<_> = store.list().iter().filter(|t| t.id != "1").cloned().collect();
    let seeded_others: Vec<_> = TodoStore::seeded()
        .list()
        .iter()
        .filter(|t| t.id != "1")
        .cloned()
        .collect();
    assert_eq!(others, seeded_others);
}

#[test]
fn test_set_done_is_repeatable() {
    let mut store = TodoStore::seeded();
    store.set_done("3", true).unwrap();
    let again = store.set_done("3", true).unwrap();
    assert!(again.done);
}
