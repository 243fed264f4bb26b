//! # gridbind - Data-Grid Component Configuration
//!
//! A no-code builder stores a grid component's settings as loosely typed
//! content: theme colors, column lists, JSON snippets for advanced users,
//! remote API endpoints. This crate turns that content into one complete
//! configuration for the grid library.
//!
//! ```rust
//! use gridbind::GridContent;
//! use serde_json::json;
//!
//! let content = GridContent::from_value(json!({
//!     "rowHeight": 500,
//!     "theme": "alpine",
//!     "themeParams": { "backgroundColor": "#123456" },
//!     "columnDefs": [{ "field": "name", "width": 20 }]
//! })).unwrap();
//!
//! let grid = content.resolve();
//! assert_eq!(grid.row_height, 200);
//! assert_eq!(grid.columns[0].width, 50);
//! assert_eq!(grid.page_size, 25);
//! ```
//!
//! The pieces live in their own crates and are re-exported here:
//! [`gridbind_theme`] for theme parameters, [`gridbind_columns`] for
//! column descriptors, and [`gridbind_schema`] for the component manifest.

pub mod cli;
mod content;
mod error;
mod lenient;
mod load;
pub mod output;
mod resolve;
mod settings;

pub use content::{AdvancedConfig, GridContent};
pub use error::{GridError, Result};
pub use load::{load_document, locate, DOCUMENT_EXTENSIONS};
pub use resolve::{CssOverrides, Endpoints, ResolvedGrid, CSS_VARIABLES};

pub use gridbind_columns;
pub use gridbind_schema;
pub use gridbind_theme;
