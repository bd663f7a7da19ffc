//! Error handling for triage intake and reporting.
//!
//! Scoring itself is total and never fails. Errors only arise at the
//! boundary: turning an untyped payload into an [`Assessment`], loading
//! configuration, or reading input.
//!
//! [`Assessment`]: crate::models::assessment::Assessment

use std::io;

/// Specialized error type for the triage crate
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// A payload field carried a value of the wrong JSON type
    #[error("invalid field `{field}`: expected {expected}, found {found}")]
    InvalidField {
        /// Field name, with `[index]` appended for list elements
        field: String,
        /// Expected JSON type
        expected: &'static str,
        /// JSON type that was actually present
        found: &'static str,
    },

    /// The payload as a whole has the wrong shape
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Strict intake rejected a key it does not know
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// An item of a batch payload failed intake
    #[error("item {index}: {source}")]
    BatchItem {
        /// Position of the item in the batch
        index: usize,
        /// Error raised for that item
        source: Box<TriageError>,
    },

    /// Configuration is unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// A computed time does not fit the calendar range
    #[error("time out of range: {0}")]
    TimeOutOfRange(String),

    /// JSON parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TriageError {
    /// Build an [`TriageError::InvalidField`] for a value of the wrong type
    #[must_use]
    pub fn invalid_field(
        field: impl Into<String>,
        expected: &'static str,
        value: &serde_json::Value,
    ) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
            found: json_type_name(value),
        }
    }

    /// Attach the position of a batch item to an error
    #[must_use]
    pub fn in_batch_item(self, index: usize) -> Self {
        Self::BatchItem {
            index,
            source: Box::new(self),
        }
    }
}

/// Name of a JSON value's type, as used in error messages
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_field_message_names_field_and_types() {
        let err = TriageError::invalid_field("severe_pain", "boolean", &json!("yes"));
        assert_eq!(
            err.to_string(),
            "invalid field `severe_pain`: expected boolean, found string"
        );
    }

    #[test]
    fn test_batch_item_message_prefixes_index() {
        let err = TriageError::BatchItem {
            index: 2,
            source: Box::new(TriageError::UnknownField("notes".to_string())),
        };
        assert_eq!(err.to_string(), "item 2: unknown field `notes`");
    }
}
