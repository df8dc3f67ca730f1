//! Route handlers. Each one takes the store lock once for its whole operation.

use axum::{extract::State, http::Uri, Json};
use serde::{Deserialize, Serialize};
use todo_core::Todo;

use crate::error::ApiError;
use crate::extract::{TodoBody, TodoIdPath};
use crate::state::AppState;

pub const GREETING: &str = "Hello from FastAPI!";
const DELETED: &str = "Todo deleted";

/// `{"message": ...}` payload used by the greeting and delete confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub async fn hello() -> Json<Message> {
    Json(Message::new(GREETING))
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

pub async fn create_todo(State(state): State<AppState>, TodoBody(input): TodoBody) -> Json<Todo> {
    let todo = state.store.write().await.create(input);
    tracing::info!(id = todo.id, completed = todo.completed, "todo created");
    Json(todo)
}

pub async fn update_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
    TodoBody(input): TodoBody,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.write().await.update(id, input).inspect_err(|_| {
        tracing::debug!(id, "update of unknown todo");
    })?;
    tracing::info!(id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<Message>, ApiError> {
    let mut store = state.store.write().await;
    store.delete(id).inspect_err(|_| {
        tracing::debug!(id, "delete of unknown todo");
    })?;
    tracing::info!(id, remaining = store.len(), "todo deleted");
    Ok(Json(Message::new(DELETED)))
}

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "no route");
    ApiError::RouteNotFound
}

pub async fn method_not_allowed(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "method not allowed");
    ApiError::MethodNotAllowed
}
