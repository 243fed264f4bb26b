//! Layering descriptors onto defaults.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::data_type::DataType;
use crate::descriptor::{ColumnDescriptor, FilterSetting};

pub const DEFAULT_WIDTH: f64 = 100.0;
pub const MIN_WIDTH: f64 = 50.0;
pub const MAX_WIDTH: f64 = 500.0;

const DEFAULT_CLICK_TYPE: &str = "click";

/// Keys the resolver derives itself. Pass-through keys with these names
/// are dropped.
const DERIVED_KEYS: &[&str] = &[
    "autoHeight",
    "cellDataType",
    "cellEditor",
    "cellEditorParams",
];

/// Grid-level column defaults.
///
/// Built from the grid's sorting/filtering toggles and, in advanced mode,
/// the `defaultColDef` grid option. Sits between a column's own values
/// and the built-in defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnDefaults {
    pub width: Option<f64>,
    pub editable: Option<bool>,
    pub sortable: Option<bool>,
    pub filter: Option<FilterSetting>,
    pub resizable: Option<bool>,
    pub wrap_text: Option<bool>,
    /// Extra grid-library keys applied to every column.
    pub extra: BTreeMap<String, Value>,
}

impl ColumnDefaults {
    /// Defaults from the grid's `enableSorting` and `enableFiltering` toggles.
    pub fn from_grid(enable_sorting: bool, enable_filtering: bool) -> Self {
        Self {
            sortable: Some(enable_sorting),
            filter: Some(FilterSetting::Enabled(enable_filtering)),
            ..Self::default()
        }
    }

    /// Reads a `defaultColDef` object, leniently.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value::<ColumnDescriptor>(value.clone())
            .map(|descriptor| Self::from(&descriptor))
            .unwrap_or_default()
    }

    /// Layers `other` on top of `self`; values present in `other` win.
    pub fn merge(self, other: ColumnDefaults) -> Self {
        let mut extra = self.extra;
        extra.extend(other.extra);
        Self {
            width: other.width.or(self.width),
            editable: other.editable.or(self.editable),
            sortable: other.sortable.or(self.sortable),
            filter: other.filter.or(self.filter),
            resizable: other.resizable.or(self.resizable),
            wrap_text: other.wrap_text.or(self.wrap_text),
            extra,
        }
    }
}

impl From<&ColumnDescriptor> for ColumnDefaults {
    fn from(descriptor: &ColumnDescriptor) -> Self {
        Self {
            width: descriptor.width,
            editable: descriptor.editable,
            sortable: descriptor.sortable,
            filter: descriptor.filter.clone(),
            resizable: descriptor.resizable,
            wrap_text: descriptor.wrap_text,
            extra: descriptor.extra.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellEditorParams {
    pub values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOnClick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A column in the grid library's shape, every setting decided.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColumn {
    pub field: String,
    pub header_name: String,
    pub width: u32,
    pub editable: bool,
    pub sortable: bool,
    /// Either a filter name or `false`; never `true`.
    pub filter: FilterSetting,
    pub resizable: bool,
    pub data_type: DataType,
    pub cell_data_type: &'static str,
    pub cell_editor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_editor_params: Option<CellEditorParams>,
    pub wrap_text: bool,
    pub auto_height: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<ResolvedOnClick>,
    /// Class name to condition expression.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub row_class_rules: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Resolves one descriptor.
///
/// # Example
///
/// ```rust
/// use gridbind_columns::{resolve_column, ColumnDefaults, ColumnDescriptor, FilterSetting};
///
/// let defaults = ColumnDefaults::from_grid(true, false);
/// let column = resolve_column(&ColumnDescriptor::new("id"), &defaults);
///
/// assert_eq!(column.header_name, "id");
/// assert_eq!(column.width, 100);
/// assert_eq!(column.filter, FilterSetting::Enabled(false));
/// ```
pub fn resolve_column(column: &ColumnDescriptor, defaults: &ColumnDefaults) -> ResolvedColumn {
    let field = column.field.clone().unwrap_or_default();
    let header_name = column.header_name.clone().unwrap_or_else(|| field.clone());
    let data_type = column.data_type.unwrap_or_default();

    let width = column
        .width
        .or(defaults.width)
        .unwrap_or(DEFAULT_WIDTH)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .round() as u32;

    let filter = match column
        .filter
        .clone()
        .or_else(|| defaults.filter.clone())
        .unwrap_or(FilterSetting::Enabled(true))
    {
        FilterSetting::Enabled(true) => FilterSetting::Named(data_type.default_filter().into()),
        other => other,
    };

    let wrap_text = column.wrap_text.or(defaults.wrap_text).unwrap_or(false);

    let cell_editor_params = (data_type == DataType::Dropdown).then(|| CellEditorParams {
        values: column.dropdown_options.clone(),
    });

    let on_click = match (&column.on_click, data_type) {
        (Some(on_click), DataType::Richtext) => Some(ResolvedOnClick {
            workflow_id: on_click.workflow_id.clone(),
            kind: on_click
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_CLICK_TYPE.to_string()),
        }),
        (Some(_), other) => {
            tracing::debug!(field = %field, data_type = %other, "dropping onClick on non-richtext column");
            None
        }
        (None, _) => None,
    };

    let row_class_rules = column
        .row_class_rules
        .iter()
        .map(|rule| (rule.class_name.clone(), rule.condition.clone()))
        .collect();

    let mut extra = defaults.extra.clone();
    extra.extend(column.extra.clone());
    extra.retain(|key, _| {
        let derived = DERIVED_KEYS.contains(&key.as_str());
        if derived {
            tracing::debug!(field = %field, key = %key, "ignoring pass-through key");
        }
        !derived
    });

    ResolvedColumn {
        header_name,
        width,
        editable: column.editable.or(defaults.editable).unwrap_or(true),
        sortable: column.sortable.or(defaults.sortable).unwrap_or(true),
        filter,
        resizable: column.resizable.or(defaults.resizable).unwrap_or(true),
        data_type,
        cell_data_type: data_type.cell_data_type(),
        cell_editor: data_type.cell_editor(),
        cell_editor_params,
        wrap_text,
        auto_height: wrap_text,
        on_click,
        row_class_rules,
        extra,
        field,
    }
}

/// Resolves each descriptor independently, preserving order.
pub fn resolve_columns(
    columns: &[ColumnDescriptor],
    defaults: &ColumnDefaults,
) -> Vec<ResolvedColumn> {
    columns
        .iter()
        .map(|column| resolve_column(column, defaults))
        .collect()
}
