//! Serializing resolved configuration for the command line.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        OutputError::Csv(err.to_string())
    }
}

/// Output format for structured data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    /// Rows for lists of objects, `key,value` pairs for a single object.
    Csv,
}

pub fn render<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Csv => to_csv(&serde_json::to_value(data)?),
    }
}

fn to_csv(value: &Value) -> Result<String, OutputError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    match value {
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) => {
                // Later rows may carry keys the first one lacks.
                let mut headers: Vec<&str> = first.keys().map(String::as_str).collect();
                for item in items.iter().skip(1) {
                    if let Value::Object(obj) = item {
                        for key in obj.keys() {
                            if !headers.contains(&key.as_str()) {
                                headers.push(key);
                            }
                        }
                    }
                }
                wtr.write_record(&headers)?;
                for item in items {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| obj.get(*h).map(cell).unwrap_or_default())
                            .collect();
                        wtr.write_record(&row)?;
                    }
                }
            }
            _ => {
                wtr.write_record(["value"])?;
                for item in items {
                    wtr.write_record([cell(item)])?;
                }
            }
        },
        Value::Object(obj) => {
            wtr.write_record(["key", "value"])?;
            for (key, value) in obj {
                wtr.write_record([key.as_str(), &cell(value)])?;
            }
        }
        scalar => {
            wtr.write_record(["value"])?;
            wtr.write_record([cell(scalar)])?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| OutputError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Csv(e.to_string()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
