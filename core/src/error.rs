//! Error types for store operations.
//!
//! Only lookups by id can fail; creation and listing are infallible.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No todo with the given id exists in the collection.
    #[error("Todo not found")]
    NotFound(TodoId),
}
