//! Error types for loading and strictly parsing grid content.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading or strictly parsing grid content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A file could not be read.
    #[error("failed to read {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// The document is not valid JSON/YAML or does not fit the content shape.
    #[error("failed to parse grid content{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// An advanced-mode property holds malformed JSON.
    #[error("invalid {property}: {message}")]
    Advanced {
        property: &'static str,
        message: String,
    },
}

impl GridError {
    pub(crate) fn parse(path: Option<&Path>, message: impl ToString) -> Self {
        GridError::Parse {
            path: path.map(Path::to_path_buf),
            message: message.to_string(),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, GridError>;
