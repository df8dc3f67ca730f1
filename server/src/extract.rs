//! Request extractors that validate input before it reaches a handler.

use std::num::IntErrorKind;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;
use todo_core::{FieldError, TodoError, TodoId, TodoInput, ValidationErrors};

use crate::error::ApiError;

const TODO_ID: &str = "todo_id";

/// A create/update body that passed field validation.
///
/// Unlike `axum::Json`, the content type is not checked; any body that parses
/// as JSON is accepted and then validated field by field.
#[derive(Debug)]
pub struct TodoBody(pub TodoInput);

impl<S> FromRequest<S> for TodoBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| ValidationErrors::single(FieldError::json_invalid(err)))?;
        let input = TodoInput::from_value(&value)?;
        Ok(TodoBody(input))
    }
}

/// The `{todo_id}` path segment parsed as an integer.
///
/// Integers outside the id range cannot name a stored todo, so they are
/// rejected as not found rather than as malformed.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(%rejection, "todo_id path segment missing");
                ValidationErrors::single(FieldError::int_parsing(TODO_ID, ""))
            })?;
        match raw.parse::<TodoId>() {
            Ok(id) => Ok(TodoIdPath(id)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Err(TodoError::NotFound(TodoId::MAX).into()),
                IntErrorKind::NegOverflow => Err(TodoError::NotFound(TodoId::MIN).into()),
                _ => Err(ValidationErrors::single(FieldError::int_parsing(TODO_ID, &raw)).into()),
            },
        }
    }
}
