//! Field readers that never fail.
//!
//! Each reader takes whatever JSON the host stored and returns `None` (or
//! an empty list) when the value is empty or has the wrong shape. Used
//! through `#[serde(deserialize_with = ...)]` so a bad field never rejects
//! the whole descriptor.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::data_type::DataType;
use crate::descriptor::{FilterSetting, OnClick, RowClassRule};

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_value(&Value::deserialize(deserializer)?))
}

pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
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

pub(crate) fn data_type<'de, D>(deserializer: D) -> Result<Option<DataType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_value(&value).and_then(|s| match s.parse() {
        Ok(data_type) => Some(data_type),
        Err(reason) => {
            tracing::debug!(%reason, "ignoring column data type");
            None
        }
    }))
}

pub(crate) fn filter<'de, D>(deserializer: D) -> Result<Option<FilterSetting>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(FilterSetting::Enabled(b)),
        other => string_value(&other).map(FilterSetting::Named),
    })
}

/// Dropdown options: strings and numbers, blanks skipped.
pub(crate) fn options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .iter()
        .filter_map(|item| match item {
            Value::Number(n) => Some(n.to_string()),
            other => string_value(other),
        })
        .collect())
}

pub(crate) fn on_click<'de, D>(deserializer: D) -> Result<Option<OnClick>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Object(map) if !map.is_empty() => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Row class rules with both a class name and a condition.
///
/// Accepts the builder's list of `{ className, condition }` items and the
/// grid library's own `{ "class-name": "condition" }` map.
pub(crate) fn rules<'de, D>(deserializer: D) -> Result<Vec<RowClassRule>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| {
                let rule: RawRule = serde_json::from_value(item).ok()?;
                Some(RowClassRule {
                    class_name: rule.class_name?,
                    condition: rule.condition?,
                })
            })
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .filter(|(class_name, _)| !class_name.trim().is_empty())
            .filter_map(|(class_name, condition)| {
                Some(RowClassRule {
                    class_name,
                    condition: string_value(&condition)?,
                })
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    #[serde(default, deserialize_with = "string")]
    class_name: Option<String>,
    #[serde(default, deserialize_with = "string")]
    condition: Option<String>,
}

fn string_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}
