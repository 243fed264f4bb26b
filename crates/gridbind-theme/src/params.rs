//! Partial parameter sets supplied by the host.
//!
//! [`ThemeParams`] is what the builder hands over as `themeParams`: any
//! subset of the recognized parameters. Construction filters the raw input:
//!
//! - unrecognized keys are ignored
//! - empty values (`""`, `null`, `0`, `false`, `{}`, `[]`) are treated as absent
//! - values of the wrong shape for their key are treated as absent
//!
//! Filtering never fails, so anything that survives can be trusted by the
//! resolver. Parsing a document that is not an object at all is the only
//! error.
//!
//! ```rust
//! use gridbind_theme::{ThemeParam, ThemeParams};
//!
//! let params = ThemeParams::from_json(r##"{
//!     "accentColor": "#FF6B35",
//!     "fontSize": "",
//!     "rowHoverColor": "#000"
//! }"##).unwrap();
//!
//! assert_eq!(params.len(), 1);
//! assert!(params.get(ThemeParam::AccentColor).is_some());
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, ThemeError};
use crate::param::ThemeParam;
use crate::value::{is_empty_value, ParamValue};

/// A partial mapping from theme parameter to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeParams {
    values: BTreeMap<ThemeParam, ParamValue>,
}

impl ThemeParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning the updated set for chaining.
    ///
    /// Values that are empty or of the wrong shape for `param` are dropped
    /// and any previous value for `param` is kept.
    ///
    /// ```rust
    /// use gridbind_theme::{ThemeParam, ThemeParams};
    /// use serde_json::json;
    ///
    /// let params = ThemeParams::new()
    ///     .set(ThemeParam::BackgroundColor, json!("#123456"))
    ///     .set(ThemeParam::HeaderTextColor, ThemeParam::ForegroundColor)
    ///     .set(ThemeParam::FontSize, json!("large-ish"))
    ///     .set(ThemeParam::Spacing, json!(0));
    ///
    /// // "large-ish" is a valid CSS length string as far as shape goes;
    /// // spacing 0 counts as absent.
    /// assert_eq!(params.len(), 3);
    /// ```
    pub fn set(mut self, param: ThemeParam, value: impl Into<ParamValue>) -> Self {
        self.insert(param, value.into());
        self
    }

    /// Inserts a parameter in place. Returns true if the value was accepted.
    pub fn insert(&mut self, param: ThemeParam, value: ParamValue) -> bool {
        if accepts(param, &value) {
            self.values.insert(param, value);
            true
        } else {
            tracing::debug!(param = %param, ?value, "dropping theme override of unexpected shape");
            false
        }
    }

    /// Stores an already resolved value without filtering.
    ///
    /// A resolved theme may legitimately hold `0` (for example a spacing
    /// that referenced a zero border radius), which `insert` would drop.
    pub(crate) fn insert_resolved(&mut self, param: ThemeParam, value: serde_json::Value) {
        self.values.insert(param, ParamValue::Literal(value));
    }

    /// Returns the value for `param`, if present.
    pub fn get(&self, param: ThemeParam) -> Option<&ParamValue> {
        self.values.get(&param)
    }

    /// Removes `param`, returning its value.
    pub fn remove(&mut self, param: ThemeParam) -> Option<ParamValue> {
        self.values.remove(&param)
    }

    /// Returns true if `param` is present.
    pub fn contains(&self, param: ThemeParam) -> bool {
        self.values.contains_key(&param)
    }

    /// Number of parameters present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over present parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeParam, &ParamValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Merges another set into this one. Values from `other` win.
    pub fn merge(mut self, other: ThemeParams) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Builds a parameter set from a loosely typed host value.
    ///
    /// `null` yields an empty set. Any other non-object is an error.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, None)
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Loads a parameter set from a file.
    ///
    /// `.json` files are parsed as JSON; everything else as YAML, which
    /// also accepts JSON content.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let value: Value = if is_json_path(path) {
            serde_json::from_str(&content).map_err(|e| ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message: e.to_string(),
            })?
        };
        Self::from_value_at(&value, Some(path))
    }

    fn from_value_at(value: &Value, path: Option<&Path>) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(map) => map,
            other => {
                return Err(ThemeError::NotAnObject {
                    path: path.map(Path::to_path_buf),
                    found: json_type_name(other),
                })
            }
        };

        let mut params = Self::new();
        for (key, raw) in map {
            let Some(param) = ThemeParam::from_name(key) else {
                tracing::trace!(key = %key, "ignoring unrecognized theme parameter");
                continue;
            };
            match ParamValue::from_raw(raw) {
                Some(value) => {
                    params.insert(param, value);
                }
                None => tracing::trace!(param = %param, "theme override is empty"),
            }
        }
        Ok(params)
    }
}

impl Serialize for ThemeParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (param, value) in &self.values {
            map.serialize_entry(param.as_str(), value)?;
        }
        map.end()
    }
}

impl FromIterator<(ThemeParam, ParamValue)> for ThemeParams {
    fn from_iter<I: IntoIterator<Item = (ThemeParam, ParamValue)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (param, value) in iter {
            params.insert(param, value);
        }
        params
    }
}

/// Returns true if `value` is usable as an override for `param`.
fn accepts(param: ThemeParam, value: &ParamValue) -> bool {
    if let ParamValue::Literal(literal) = value {
        if is_empty_value(literal) {
            return false;
        }
    }
    value.fits(param)
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
