//! Domain records for the todo service.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a todo by the store. Always positive for stored
/// records; lookups accept any value and simply miss on the rest.
pub type TodoId = i64;

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a todo or fully replacing an existing one.
///
/// `completed` defaults to `false` when omitted. Build it from untrusted JSON
/// with [`TodoInput::from_value`] to get field-level errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

impl Todo {
    pub(crate) fn from_input(id: TodoId, input: TodoInput) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
        }
    }
}
