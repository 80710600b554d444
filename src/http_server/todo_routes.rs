//! Todo HTTP Routes
//!
//! Thin adapters between the `/todos` endpoints and [`TodoStore`]. Each
//! handler reads the path and body, makes exactly one store call under the
//! store lock, and turns the outcome into a status code and JSON body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::errors::{ApiError, ApiResult};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{Todo, TodoStore};

// ==================
// Shared State
// ==================

/// State shared by every handler
///
/// All store access goes through the one lock. Mutations hold the write
/// guard across their whole lookup-and-modify step.
pub struct TodoState {
    pub store: RwLock<TodoStore>,
    pub metrics: MetricsRegistry,
}

impl TodoState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: RwLock::new(store),
            metrics: MetricsRegistry::new(),
        }
    }

    /// State holding the startup todos
    pub fn seeded() -> Self {
        Self::new(TodoStore::seeded())
    }

    fn record_not_found(&self, id: &str) {
        self.metrics.increment_not_found();
        log_event_with_fields(Event::TodoNotFound, &[("id", id)]);
    }

    fn record_malformed(&self, route: &str, reason: &str) {
        self.metrics.increment_malformed();
        log_event_with_fields(Event::MalformedBody, &[("route", route), ("reason", reason)]);
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::seeded()
    }
}

// ==================
// Todo Routes
// ==================

/// Create todo routes
pub fn todo_routes(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/todos", get(list_todos_handler).post(create_todo_handler))
        .route(
            "/todos/:id",
            get(get_todo_handler)
                .delete(delete_todo_handler)
                .patch(set_done_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_todos_handler(State(state): State<Arc<TodoState>>) -> Json<Vec<Todo>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

async fn get_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Todo>> {
    let store = state.store.read().await;
    let todo = store.find_by_id(&id).map_err(|err| {
        state.record_not_found(&id);
        ApiError::from(err)
    })?;
    Ok(Json(todo))
}

async fn create_todo_handler(
    State(state): State<Arc<TodoState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    // A `null` body decodes to an all-default todo
    let todo = serde_json::from_slice::<Option<Todo>>(&body)
        .map_err(|err| {
            state.record_malformed("create", &err.to_string());
            ApiError::UnreadableBody
        })?
        .unwrap_or_default();

    let created = state.store.write().await.append(todo);
    state.metrics.increment_created();
    log_event_with_fields(Event::TodoCreated, &[("id", &created.id)]);

    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.write().await.delete_by_id(&id).map_err(|_| {
        state.record_not_found(&id);
        ApiError::TodoDoesNotExist
    })?;

    state.metrics.increment_deleted();
    log_event_with_fields(Event::TodoDeleted, &[("id", &id)]);
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH accepts any JSON object. Only a boolean `done` key has an effect;
/// without one the record is returned unchanged.
async fn set_done_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Todo>> {
    // The body is checked before the id, so a bad body on an unknown id is a 400
    let updates: Option<Map<String, Value>> = serde_json::from_slice(&body).map_err(|err| {
        let reason = err.to_string();
        state.record_malformed("set_done", &reason);
        ApiError::MalformedBody(reason)
    })?;

    let done = requested_done(updates.as_ref());

    let mut store = state.store.write().await;
    let result = match done {
        Some(done) => store.set_done(&id, done),
        None => store.find_by_id(&id),
    };
    drop(store);

    let todo = result.map_err(|err| {
        state.record_not_found(&id);
        ApiError::from(err)
    })?;

    match done {
        Some(done) => {
            state.metrics.increment_updated();
            let done = done.to_string();
            log_event_with_fields(Event::TodoUpdated, &[("id", &id), ("done", &done)]);
        }
        None => log_event_with_fields(Event::PatchWithoutDone, &[("id", &id)]),
    }

    Ok(Json(todo))
}

/// The `done` value of a PATCH body, if present and boolean
fn requested_done(updates: Option<&Map<String, Value>>) -> Option<bool> {
    updates?.get("done")?.as_bool()
}
