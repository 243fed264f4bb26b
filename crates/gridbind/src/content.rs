//! The host's property values for one grid instance.

use std::collections::BTreeMap;
use std::path::Path;

use gridbind_columns::{parse_columns_value, ColumnDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GridError, Result};
use crate::lenient;
use crate::load::load_document;
use crate::settings::default_text;

/// Component content as the host stores it.
///
/// Every field is optional. Missing, `null`, empty and wrongly typed
/// values fall back to the manifest defaults when the content is resolved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridContent {
    #[serde(deserialize_with = "lenient::boolean")]
    pub advanced_mode: Option<bool>,
    #[serde(deserialize_with = "lenient::string")]
    pub grid_options: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub column_defs_code: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub custom_events: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub row_height: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub header_height: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub page_size: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub checkbox_selection_field: Option<String>,

    #[serde(deserialize_with = "lenient::rows")]
    pub table_data: Option<Vec<Value>>,
    /// Builder column list; read leniently.
    pub column_defs: Value,
    #[serde(deserialize_with = "lenient::string")]
    pub xano_endpoint: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub xano_create_endpoint: Option<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub xano_headers: Option<Map<String, Value>>,

    #[serde(deserialize_with = "lenient::string")]
    pub font_family: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub enable_filtering: Option<bool>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub enable_sorting: Option<bool>,
    #[serde(deserialize_with = "lenient::string")]
    pub loading_message: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub auto_size_columns: Option<bool>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub show_add_row_button: Option<bool>,

    #[serde(deserialize_with = "lenient::string")]
    pub accent_color: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub header_background_color: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub header_text_color: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub selected_row_background_color: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub theme: Option<String>,
    pub custom_theme: Value,
    pub theme_params: Value,
}

/// Parsed advanced-mode properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdvancedConfig {
    /// `gridOptions` without its `defaultColDef` entry.
    pub grid_options: Map<String, Value>,
    pub default_col_def: Option<Value>,
    /// Replaces the builder column list when present.
    pub column_defs: Option<Vec<ColumnDescriptor>>,
    /// Event handler name to enabled flag.
    pub custom_events: BTreeMap<String, bool>,
}

impl GridContent {
    /// Reads content from a JSON object.
    ///
    /// # Errors
    ///
    /// [`GridError::Parse`] when the document is not an object. Fields of
    /// the wrong type are read as absent.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_document(value, None)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| GridError::parse(None, e))?;
        Self::from_value(value)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml).map_err(|e| GridError::parse(None, e))?;
        Self::from_value(value)
    }

    /// Loads content from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::from_document(load_document(path)?, Some(path))
    }

    fn from_document(value: Value, path: Option<&Path>) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value).map_err(|e| GridError::parse(path, e)),
            _ => Err(GridError::parse(path, "grid content must be an object")),
        }
    }

    /// Whether advanced mode is switched on.
    pub fn is_advanced(&self) -> bool {
        self.advanced_mode.unwrap_or(false)
    }

    /// Parses the advanced-mode JSON properties, failing on the first
    /// malformed one.
    ///
    /// Absent properties use their manifest default; blank ones parse as
    /// empty. Outside advanced mode this always returns an empty
    /// configuration.
    pub fn parse_advanced(&self) -> Result<AdvancedConfig> {
        if !self.is_advanced() {
            return Ok(AdvancedConfig::default());
        }
        let grid_options = parse_grid_options(code_or_default("gridOptions", &self.grid_options))?;
        let column_defs =
            parse_column_code(code_or_default("columnDefsCode", &self.column_defs_code))?;
        let custom_events =
            parse_custom_events(code_or_default("customEvents", &self.custom_events))?;

        let (grid_options, default_col_def) = split_grid_options(grid_options);
        Ok(AdvancedConfig {
            grid_options,
            default_col_def,
            column_defs,
            custom_events,
        })
    }

    /// Same as [`parse_advanced`](Self::parse_advanced), but a malformed
    /// property is logged and treated as blank.
    pub fn advanced_lenient(&self) -> AdvancedConfig {
        if !self.is_advanced() {
            return AdvancedConfig::default();
        }
        let (grid_options, default_col_def) = split_grid_options(lenient(parse_grid_options(
            code_or_default("gridOptions", &self.grid_options),
        )));
        AdvancedConfig {
            grid_options,
            default_col_def,
            column_defs: lenient(parse_column_code(
                code_or_default("columnDefsCode", &self.column_defs_code),
            )),
            custom_events: lenient(parse_custom_events(
                code_or_default("customEvents", &self.custom_events),
            )),
        }
    }
}

fn code_or_default<'a>(property: &str, value: &'a Option<String>) -> Option<&'a str> {
    value.as_deref().or_else(|| default_text(property))
}

fn lenient<T: Default>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring advanced property");
        T::default()
    })
}

/// Parses a code property's JSON; blank text is `None`.
fn parse_code(property: &'static str, text: Option<&str>) -> Result<Option<Value>> {
    let text = match text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| GridError::Advanced {
            property,
            message: e.to_string(),
        })
}

fn parse_grid_options(text: Option<&str>) -> Result<Map<String, Value>> {
    match parse_code("gridOptions", text)? {
        None => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(GridError::Advanced {
            property: "gridOptions",
            message: "expected an object".to_string(),
        }),
    }
}

fn split_grid_options(mut options: Map<String, Value>) -> (Map<String, Value>, Option<Value>) {
    let default_col_def = options.remove("defaultColDef");
    (options, default_col_def)
}

fn parse_column_code(text: Option<&str>) -> Result<Option<Vec<ColumnDescriptor>>> {
    match parse_code("columnDefsCode", text)? {
        None => Ok(None),
        Some(value) => parse_columns_value(value)
            .map(Some)
            .map_err(|e| GridError::Advanced {
                property: "columnDefsCode",
                message: e.to_string(),
            }),
    }
}

fn parse_custom_events(text: Option<&str>) -> Result<BTreeMap<String, bool>> {
    match parse_code("customEvents", text)? {
        None => Ok(BTreeMap::new()),
        Some(Value::Object(map)) => Ok(map
            .into_iter()
            .map(|(name, enabled)| {
                let enabled = !gridbind_theme::is_empty_value(&enabled);
                (name, enabled)
            })
            .collect()),
        Some(_) => Err(GridError::Advanced {
            property: "customEvents",
            message: "expected an object".to_string(),
        }),
    }
}
