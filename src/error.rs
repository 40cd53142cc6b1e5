//! Input-level errors and the stderr error envelope.

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Failure to obtain a document to validate. Malformed resume *content*
/// never lands here; it is reported inside [`crate::ValidationReport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    FileNotFound(String),
    InvalidJson(String),
    Unexpected(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::FileNotFound(path) => write!(f, "File not found: {path}"),
            InputError::InvalidJson(detail) => write!(f, "Invalid JSON: {detail}"),
            InputError::Unexpected(detail) => write!(f, "Unexpected error: {detail}"),
        }
    }
}

impl Error for InputError {}

/// The `{"error": ...}` object written to stderr on input failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl From<&InputError> for ErrorEnvelope {
    fn from(err: &InputError) -> Self {
        ErrorEnvelope { error: err.to_string() }
    }
}
