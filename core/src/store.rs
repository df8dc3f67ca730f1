//! Insertion-ordered todo collection with a monotonically increasing id counter.
//!
//! # Design
//! Records live in a `Vec` so listing is insertion order with no extra
//! bookkeeping. Lookups by id are linear scans; the collection is small and
//! in-memory. The counter is independent of the collection length, so deleted
//! ids are never handed out again.

use crate::error::TodoError;
use crate::types::{Todo, TodoId, TodoInput};

const FIRST_ID: TodoId = 1;

/// The process-wide todo collection.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// All todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Id the next successful `create` will assign.
    pub fn next_id(&self) -> TodoId {
        self.next_id
    }

    /// Append a new todo and consume one id from the counter.
    pub fn create(&mut self, input: TodoInput) -> Todo {
        let todo = Todo::from_input(self.next_id, input);
        self.todos.push(todo.clone());
        self.next_id += 1;
        todo
    }

    /// Replace title and completion of an existing todo. Its id and position
    /// are kept.
    pub fn update(&mut self, id: TodoId, input: TodoInput) -> Result<Todo, TodoError> {
        let slot = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound(id))?;
        *slot = Todo::from_input(id, input);
        Ok(slot.clone())
    }

    /// Remove a todo, returning it. Remaining entries keep their relative order.
    pub fn delete(&mut self, id: TodoId) -> Result<Todo, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.todos.remove(index))
    }
}
