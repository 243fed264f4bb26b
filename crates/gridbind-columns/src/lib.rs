//! # gridbind-columns - Column Descriptor Resolution
//!
//! Builder users describe grid columns with a handful of friendly fields
//! (`field`, `headerName`, `dataType`, `dropdownOptions`, ...). The grid
//! library wants something more explicit: a filter name, a cell editor, a
//! `cellDataType`, editor parameters. This crate fills the gap.
//!
//! Each descriptor is resolved on its own, in three layers:
//!
//! ```text
//! column value  >  grid-level ColumnDefaults  >  built-in defaults
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use gridbind_columns::{parse_columns, resolve_columns, ColumnDefaults};
//!
//! let columns = parse_columns(r#"[
//!     { "field": "status", "dataType": "dropdown", "dropdownOptions": ["Open", "Closed"] },
//!     { "field": "due", "headerName": "Due", "dataType": "date", "width": 900 }
//! ]"#).unwrap();
//!
//! let resolved = resolve_columns(&columns, &ColumnDefaults::default());
//!
//! assert_eq!(resolved[0].header_name, "status");
//! assert_eq!(resolved[0].cell_editor, "agSelectCellEditor");
//! assert_eq!(resolved[1].width, 500);
//! ```
//!
//! Descriptors are read leniently: a field with the wrong shape, an empty
//! string or an empty object counts as absent and falls through to the
//! next layer. Only a document that is not a list of objects is an error.

mod data_type;
mod descriptor;
mod error;
mod lenient;
mod resolve;

pub use data_type::DataType;
pub use descriptor::{
    columns_from_value, parse_columns, parse_columns_value, ColumnDescriptor, FilterSetting,
    OnClick, RowClassRule,
};
pub use error::{ColumnError, Result};
pub use resolve::{
    resolve_column, resolve_columns, CellEditorParams, ColumnDefaults, ResolvedColumn,
    ResolvedOnClick, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH,
};
