use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One field's validation failure, ready to surface next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Everything wrong with a submitted draft, in field order. Validation
/// collects all failures instead of stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid recipe draft: {}", .errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// Why a JSON import was rejected as a whole. Import is all-or-nothing: on
/// any of these the caller's existing draft state stays as it was.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Not parseable as JSON at all.
    #[error("Invalid JSON format")]
    InvalidJson(#[from] serde_json::Error),
    /// Parsed, but the root was not an object.
    #[error("Invalid JSON format: expected an object")]
    NotAnObject,
}
