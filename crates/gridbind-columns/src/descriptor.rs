//! Column descriptors as the builder stores them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_type::DataType;
use crate::error::Result;
use crate::lenient;

/// A column's `filter` setting: on/off, or a named grid filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSetting {
    Enabled(bool),
    Named(String),
}

/// Workflow triggered when a richtext cell is clicked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub workflow_id: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

/// A CSS class applied to rows matching a condition expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowClassRule {
    pub class_name: String,
    pub condition: String,
}

/// One column as declared by the user.
///
/// Every field is optional; absent fields fall through to the grid-level
/// [`ColumnDefaults`](crate::ColumnDefaults) and then to the built-in
/// defaults. Keys this type does not know about are kept in `extra` and
/// passed through to the grid untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDescriptor {
    #[serde(
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub field: Option<String>,
    #[serde(
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub header_name: Option<String>,
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f64>,
    #[serde(
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub editable: Option<bool>,
    #[serde(
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub sortable: Option<bool>,
    #[serde(
        deserialize_with = "lenient::filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter: Option<FilterSetting>,
    #[serde(
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub resizable: Option<bool>,
    #[serde(
        deserialize_with = "lenient::data_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_type: Option<DataType>,
    #[serde(
        deserialize_with = "lenient::options",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dropdown_options: Vec<String>,
    #[serde(
        deserialize_with = "lenient::on_click",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_click: Option<OnClick>,
    #[serde(
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub wrap_text: Option<bool>,
    #[serde(
        deserialize_with = "lenient::rules",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub row_class_rules: Vec<RowClassRule>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ColumnDescriptor {
    /// A descriptor for `field` with everything else left to defaults.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    pub fn header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = Some(header_name.into());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn filter(mut self, filter: FilterSetting) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Strictly parses a JSON list of column descriptors.
///
/// Individual fields are still read leniently; this only fails when the
/// text is not JSON or not a list of objects.
///
/// # Errors
///
/// Returns [`ColumnError::Parse`](crate::ColumnError::Parse) with the
/// parser's message.
pub fn parse_columns(json: &str) -> Result<Vec<ColumnDescriptor>> {
    Ok(serde_json::from_str(json)?)
}

/// Same as [`parse_columns`] for an already-parsed document.
pub fn parse_columns_value(value: Value) -> Result<Vec<ColumnDescriptor>> {
    Ok(serde_json::from_value(value)?)
}

/// Reads column descriptors from host content, never failing.
///
/// Anything that is not a list yields no columns; list items that are not
/// objects are skipped.
pub fn columns_from_value(value: &Value) -> Vec<ColumnDescriptor> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        other => {
            tracing::debug!(found = %type_name(other), "column definitions are not a list");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::debug!(index, found = %type_name(item), "skipping column definition");
                return None;
            }
            serde_json::from_value(item.clone()).ok()
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
