//! Error types for theme loading and strict resolution.
//!
//! [`resolve_theme`](crate::resolve_theme) never fails; these errors come
//! from parsing override files, building custom default tables, and the
//! strict [`ThemeResolver::try_resolve`](crate::ThemeResolver::try_resolve) path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or strictly resolving theme parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The override document could not be parsed.
    #[error("failed to parse theme parameters{}: {message}", location(.path))]
    Parse {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Message from the JSON/YAML parser.
        message: String,
    },

    /// The override document was valid but not an object.
    #[error("theme parameters{} must be an object, found {found}", location(.path))]
    NotAnObject {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// A file could not be read.
    #[error("failed to load theme parameters: {message}")]
    Load {
        /// Description of the I/O failure.
        message: String,
    },

    /// References form a cycle.
    #[error("cycle detected in theme references: {}", .path.join(" -> "))]
    CycleDetected {
        /// The parameter names along the cycle, first name repeated at the end.
        path: Vec<String>,
    },

    /// A default table does not define every recognized parameter.
    #[error("theme defaults are missing: {}", .missing.join(", "))]
    IncompleteDefaults {
        /// Names of the parameters without a default.
        missing: Vec<String>,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
