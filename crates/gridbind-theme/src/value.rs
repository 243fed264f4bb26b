//! Parameter values: literals and references.
//!
//! A parameter value is either a literal the grid library consumes directly
//! or a reference to another parameter, written `{ "ref": "backgroundColor" }`
//! on the wire. A reference resolves to whatever its target resolves to.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::param::{ParamKind, ThemeParam};

/// Key marking a reference object.
pub const REF_KEY: &str = "ref";

const COLOR_SCHEMES: &[&str] = &["light", "dark", "normal", "inherit"];
const FONT_WEIGHT_KEYWORDS: &[&str] = &["normal", "bold", "bolder", "lighter"];

/// A theme parameter value.
///
/// # Example
///
/// ```rust
/// use gridbind_theme::{ParamValue, ThemeParam};
/// use serde_json::json;
///
/// let literal = ParamValue::from(json!("#123456"));
/// let reference = ParamValue::from(ThemeParam::BackgroundColor);
///
/// assert_eq!(serde_json::to_value(&literal).unwrap(), json!("#123456"));
/// assert_eq!(
///     serde_json::to_value(&reference).unwrap(),
///     json!({ "ref": "backgroundColor" })
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A concrete value handed to the grid library as-is.
    Literal(Value),
    /// Resolves to the resolved value of another parameter.
    Ref(ThemeParam),
}

impl ParamValue {
    /// Classifies a raw host value.
    ///
    /// Returns `None` when the value counts as absent: empty per
    /// [`is_empty_value`], or a reference object naming an unknown
    /// parameter.
    pub fn from_raw(value: &Value) -> Option<Self> {
        if let Value::Object(map) = value {
            if let Some(target) = map.get(REF_KEY) {
                return target
                    .as_str()
                    .and_then(ThemeParam::from_name)
                    .map(ParamValue::Ref);
            }
        }
        if is_empty_value(value) {
            None
        } else {
            Some(ParamValue::Literal(value.clone()))
        }
    }

    /// Returns true if this value is acceptable for `param`.
    ///
    /// Literals must match the parameter's [`ParamKind`]; references must
    /// point at a different parameter of the same kind.
    pub fn fits(&self, param: ThemeParam) -> bool {
        match self {
            ParamValue::Literal(value) => matches_kind(param.kind(), value),
            ParamValue::Ref(target) => *target != param && target.kind() == param.kind(),
        }
    }

    /// Returns the reference target, if this is a reference.
    pub fn target(&self) -> Option<ThemeParam> {
        match self {
            ParamValue::Ref(target) => Some(*target),
            ParamValue::Literal(_) => None,
        }
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        ParamValue::Literal(value)
    }
}

impl From<ThemeParam> for ParamValue {
    fn from(target: ThemeParam) -> Self {
        ParamValue::Ref(target)
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Literal(value) => value.serialize(serializer),
            ParamValue::Ref(target) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(REF_KEY, target.as_str())?;
                map.end()
            }
        }
    }
}

/// Returns true if a host value counts as "not provided".
///
/// The host hands over loosely typed values, so emptiness follows the
/// falsy rules the builder uses: `null`, `false`, `0`, `NaN`, the empty
/// string, and empty arrays or objects. Whitespace-only strings are also
/// empty, since no parameter accepts them as a value.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Returns true if `value` has the shape `kind` expects.
pub fn matches_kind(kind: ParamKind, value: &Value) -> bool {
    match kind {
        ParamKind::Color => non_blank_str(value),
        ParamKind::Length => finite_number(value) || non_blank_str(value),
        ParamKind::Number => finite_number(value),
        ParamKind::FontFamily => match value {
            Value::Array(items) => !items.is_empty() && items.iter().all(is_font_entry),
            other => is_font_entry(other),
        },
        ParamKind::FontWeight => match value {
            Value::Number(n) => n.as_f64().map_or(false, |w| (1.0..=1000.0).contains(&w)),
            Value::String(s) => {
                FONT_WEIGHT_KEYWORDS.contains(&s.as_str()) || s.parse::<u16>().is_ok()
            }
            _ => false,
        },
        ParamKind::ColorScheme => value
            .as_str()
            .map_or(false, |s| COLOR_SCHEMES.contains(&s)),
    }
}

fn is_font_entry(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Object(map) => map
            .get("googleFont")
            .map_or(false, |name| non_blank_str(name)),
        _ => false,
    }
}

fn non_blank_str(value: &Value) -> bool {
    value.as_str().map_or(false, |s| !s.trim().is_empty())
}

fn finite_number(value: &Value) -> bool {
    value.as_f64().map_or(false, f64::is_finite)
}
