//! Column data types and what the grid library needs for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of data a column holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Text,
    Timestamp,
    Date,
    Boolean,
    Dropdown,
    Richtext,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Text,
        DataType::Timestamp,
        DataType::Date,
        DataType::Boolean,
        DataType::Dropdown,
        DataType::Richtext,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Timestamp => "timestamp",
            DataType::Date => "date",
            DataType::Boolean => "boolean",
            DataType::Dropdown => "dropdown",
            DataType::Richtext => "richtext",
        }
    }

    /// Filter used when a column asks for `filter: true`.
    pub fn default_filter(self) -> &'static str {
        match self {
            DataType::Timestamp | DataType::Date => "agDateColumnFilter",
            _ => "agTextColumnFilter",
        }
    }

    pub fn cell_editor(self) -> &'static str {
        match self {
            DataType::Text => "agTextCellEditor",
            DataType::Timestamp | DataType::Date => "agDateStringCellEditor",
            DataType::Boolean => "agCheckboxCellEditor",
            DataType::Dropdown => "agSelectCellEditor",
            DataType::Richtext => "agLargeTextCellEditor",
        }
    }

    /// The grid library's `cellDataType`.
    pub fn cell_data_type(self) -> &'static str {
        match self {
            DataType::Timestamp | DataType::Date => "dateString",
            DataType::Boolean => "boolean",
            _ => "text",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DataType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("unknown data type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("RichText".parse::<DataType>().unwrap(), DataType::Richtext);
        assert_eq!(" date ".parse::<DataType>().unwrap(), DataType::Date);
        assert!("number".parse::<DataType>().is_err());
    }

    #[test]
    fn test_derivation_table() {
        let table: Vec<_> = DataType::ALL
            .iter()
            .map(|t| (t.as_str(), t.default_filter(), t.cell_editor(), t.cell_data_type()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("text", "agTextColumnFilter", "agTextCellEditor", "text"),
                ("timestamp", "agDateColumnFilter", "agDateStringCellEditor", "dateString"),
                ("date", "agDateColumnFilter", "agDateStringCellEditor", "dateString"),
                ("boolean", "agTextColumnFilter", "agCheckboxCellEditor", "boolean"),
                ("dropdown", "agTextColumnFilter", "agSelectCellEditor", "text"),
                ("richtext", "agTextColumnFilter", "agLargeTextCellEditor", "text"),
            ]
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&DataType::Richtext).unwrap(),
            "\"richtext\""
        );
        let parsed: DataType = serde_json::from_str("\"timestamp\"").unwrap();
        assert_eq!(parsed, DataType::Timestamp);
    }
}
