//! Error types for the strict column parser.

use thiserror::Error;

/// Errors produced by [`parse_columns`](crate::parse_columns).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// The document is not valid JSON or not a list of objects.
    #[error("failed to parse column definitions: {message}")]
    Parse { message: String },
}

impl From<serde_json::Error> for ColumnError {
    fn from(err: serde_json::Error) -> Self {
        ColumnError::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type for column operations.
pub type Result<T> = std::result::Result<T, ColumnError>;
