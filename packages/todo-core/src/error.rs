use crate::TodoId;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type TodoResult<T = ()> = Result<T, TodoError>;

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

pub type StoreResult<T = ()> = Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(r#"Todo "{0}" was not found."#)]
    NotFound(TodoId),

    #[error(r#"Invalid ID format: "{0}"."#)]
    MalformedIdentifier(String),

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

/// A user-correctable problem with one field of a todo.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: ValidationField,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: ValidationField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationField {
    Title,
    Priority,
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationField::Title => "title",
            ValidationField::Priority => "priority",
        };

        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(r#"The todo store is unavailable: {0}."#)]
    Unavailable(String),
}
