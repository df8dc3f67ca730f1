//! Field-level validation of request bodies.
//!
//! # Design
//! Bodies are first parsed into a `serde_json::Value`, then checked field by
//! field so every problem is reported with its location, not just the first
//! one serde trips on. The error shape (`type`, `loc`, `msg`, `input`) is what
//! clients receive in the `detail` array of a 422 response.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::TodoInput;

const BODY: &str = "body";

/// One validation failure, located by a path such as `["body", "title"]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Value,
}

impl FieldError {
    fn new(kind: &'static str, loc: &[&str], msg: impl Into<String>, input: Value) -> Self {
        Self {
            kind,
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            input,
        }
    }

    /// The body could not be parsed as JSON at all.
    pub fn json_invalid(reason: impl std::fmt::Display) -> Self {
        Self::new("json_invalid", &[BODY], format!("JSON decode error: {reason}"), Value::Null)
    }

    /// A path segment that should be an integer was not.
    pub fn int_parsing(name: &str, raw: &str) -> Self {
        Self::new(
            "int_parsing",
            &["path", name],
            "Input should be a valid integer, unable to parse string as an integer",
            Value::String(raw.to_string()),
        )
    }
}

/// Non-empty list of field errors for one request.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl TodoInput {
    /// Validate an untrusted JSON document as a create/update body.
    ///
    /// Unknown fields are ignored. `completed` may be omitted but not `null`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = value.as_object() else {
            return Err(ValidationErrors::single(FieldError::new(
                "model_attributes_type",
                &[BODY],
                "Input should be a valid dictionary or object to extract fields from",
                value.clone(),
            )));
        };

        let mut errors = Vec::new();
        let title = check_title(object, value, &mut errors);
        let completed = check_completed(object, &mut errors);

        match (title, completed) {
            (Some(title), Some(completed)) if errors.is_empty() => Ok(TodoInput { title, completed }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

fn check_title(object: &Map<String, Value>, body: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get("title") {
        Some(Value::String(title)) => Some(title.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                "string_type",
                &[BODY, "title"],
                "Input should be a valid string",
                other.clone(),
            ));
            None
        }
        None => {
            errors.push(FieldError::new("missing", &[BODY, "title"], "Field required", body.clone()));
            None
        }
    }
}

fn check_completed(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<bool> {
    match object.get("completed") {
        None => Some(false),
        Some(Value::Bool(completed)) => Some(*completed),
        Some(other) => {
            errors.push(FieldError::new(
                "bool_type",
                &[BODY, "completed"],
                "Input should be a valid boolean",
                other.clone(),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_title_only() {
        let input = TodoInput::from_value(&json!({"title": "buy milk"})).unwrap();
        assert_eq!(input, TodoInput::new("buy milk", false));
    }

    #[test]
    fn accepts_explicit_completed_and_ignores_extra_fields() {
        let input = TodoInput::from_value(&json!({"title": "x", "completed": true, "id": 99})).unwrap();
        assert_eq!(input, TodoInput::new("x", true));
    }

    #[test]
    fn accepts_empty_title() {
        let input = TodoInput::from_value(&json!({"title": ""})).unwrap();
        assert_eq!(input.title, "");
    }

    #[test]
    fn missing_title_is_reported_against_the_field() {
        let err = TodoInput::from_value(&json!({"completed": true})).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        let field = &err.errors()[0];
        assert_eq!(field.kind, "missing");
        assert_eq!(field.loc, vec!["body", "title"]);
        assert_eq!(field.msg, "Field required");
    }

    #[test]
    fn non_string_title_is_rejected() {
        let err = TodoInput::from_value(&json!({"title": 5})).unwrap_err();
        assert_eq!(err.errors()[0].kind, "string_type");
        assert_eq!(err.errors()[0].input, json!(5));
    }

    #[test]
    fn null_completed_is_rejected() {
        let err = TodoInput::from_value(&json!({"title": "x", "completed": null})).unwrap_err();
        assert_eq!(err.errors()[0].kind, "bool_type");
        assert_eq!(err.errors()[0].loc, vec!["body", "completed"]);
    }

    #[test]
    fn completed_must_be_a_json_boolean() {
        for value in [json!(1), json!(0), json!("true"), json!("false")] {
            let err = TodoInput::from_value(&json!({"title": "x", "completed": value.clone()})).unwrap_err();
            assert_eq!(err.errors()[0].kind, "bool_type");
            assert_eq!(err.errors()[0].input, value);
        }
    }

    #[test]
    fn collects_every_field_error() {
        let err = TodoInput::from_value(&json!({"title": [], "completed": "yes"})).unwrap_err();
        let kinds: Vec<_> = err.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["string_type", "bool_type"]);
        assert_eq!(err.to_string(), "2 validation error(s)");
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = TodoInput::from_value(&json!(["title"])).unwrap_err();
        assert_eq!(err.errors()[0].kind, "model_attributes_type");
        assert_eq!(err.errors()[0].loc, vec!["body"]);
    }

    #[test]
    fn field_error_serializes_with_type_key() {
        let json = serde_json::to_value(FieldError::int_parsing("todo_id", "abc")).unwrap();
        assert_eq!(json["type"], "int_parsing");
        assert_eq!(json["loc"], json!(["path", "todo_id"]));
        assert_eq!(json["input"], "abc");
    }
}
