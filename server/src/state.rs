//! Shared service context handed to every handler.

use std::sync::Arc;

use todo_core::TodoStore;
use tokio::sync::RwLock;

pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Owns the single todo collection and its id counter for the process.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
