//! Content field readers that never fail.
//!
//! Host values are bound from anywhere in the builder, so a number may
//! arrive as `"40"` and a list as `{}`. Every reader maps a value of the
//! wrong shape to `None`, which later falls back to the manifest default.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Strings are kept verbatim, blank ones included.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Booleans, or the strings `"true"` and `"false"`.
pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Finite numbers, or strings holding one.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|n| n.is_finite()))
}

pub(crate) fn rows<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items),
        other => {
            if !other.is_null() {
                tracing::debug!(found = %other, "ignoring table data that is not a list");
            }
            None
        }
    })
}

pub(crate) fn object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "number")]
        n: Option<f64>,
        #[serde(default, deserialize_with = "boolean")]
        b: Option<bool>,
        #[serde(default, deserialize_with = "string")]
        s: Option<String>,
    }

    fn read(value: Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        assert_eq!(read(json!({ "n": "40" })).n, Some(40.0));
        assert_eq!(read(json!({ "n": " 12.5 " })).n, Some(12.5));
        assert_eq!(read(json!({ "n": "tall" })).n, None);
        assert_eq!(read(json!({ "n": [40] })).n, None);
    }

    #[test]
    fn test_boolean_accepts_bool_strings() {
        assert_eq!(read(json!({ "b": "true" })).b, Some(true));
        assert_eq!(read(json!({ "b": "FALSE" })).b, Some(false));
        assert_eq!(read(json!({ "b": 1 })).b, None);
    }

    #[test]
    fn test_string_keeps_blank() {
        assert_eq!(read(json!({ "s": "" })).s.as_deref(), Some(""));
        assert_eq!(read(json!({ "s": 5 })).s, None);
        assert_eq!(read(json!({})).s, None);
    }
}
