//! # gridbind-schema - Component Manifest
//!
//! The no-code host discovers what the grid component can do by reading a
//! manifest: the editable properties (with their inspector section, kind,
//! default and visibility rule), the events the component emits, and the
//! actions it accepts. Everything here is plain data.
//!
//! ```rust
//! use gridbind_schema::{manifest, PropertyKind};
//!
//! let manifest = manifest();
//! let row_height = manifest.property("rowHeight").unwrap();
//!
//! assert_eq!(row_height.kind, PropertyKind::Number);
//! assert_eq!(row_height.clamp(500.0), Some(200.0));
//! assert!(manifest.trigger("cellValueChanged").is_some());
//! assert!(manifest.action("exportToCSV").is_some());
//! ```
//!
//! The [`fixtures`] module carries sample columns, rows and a detail-cell
//! template used for previews and tests.

mod builtin;
mod error;
pub mod fixtures;
mod manifest;
mod property;

pub use builtin::manifest;
pub use error::FixtureError;
pub use manifest::{Action, ComponentManifest, EditorInfo, TriggerEvent};
pub use property::{
    BindingValidation, HiddenUnless, ListOptions, NumberRange, PropertyDef, PropertyKind,
    PropertyOptions, Section, SelectOption,
};
