//! Error responses for the HTTP layer.
//!
//! Every error body has a single `detail` key: a string for 404s, a list of
//! field errors for 422s.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{TodoError, ValidationErrors};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    /// Request body or path failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The body could not be read, e.g. it exceeds the size limit.
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Todo(TodoError::NotFound(_)) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(ErrorBody { detail: errors.0 })).into_response()
            }
            ApiError::Body(rejection) => {
                (status, Json(ErrorBody { detail: rejection.body_text() })).into_response()
            }
            other => (status, Json(ErrorBody { detail: other.to_string() })).into_response(),
        }
    }
}
