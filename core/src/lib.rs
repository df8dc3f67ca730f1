//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo record types, boundary validation for request bodies, and
//! `TodoStore`, the insertion-ordered collection plus identifier counter that
//! backs every HTTP operation. Nothing here performs I/O or knows about axum;
//! the server crate owns locking and transport.
//!
//! # Design
//! - `TodoStore` is a plain owned value. Callers that share it across threads
//!   wrap the whole store (collection and counter together) in one lock.
//! - Ids are allocated from a counter that only moves forward, so ids are
//!   never reused after a delete.
//! - `TodoInput::from_value` turns an arbitrary JSON document into a typed
//!   input or a list of field-level errors, before any mutation happens.

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::TodoError;
pub use store::TodoStore;
pub use types::{Todo, TodoId, TodoInput};
pub use validate::{FieldError, ValidationErrors};
