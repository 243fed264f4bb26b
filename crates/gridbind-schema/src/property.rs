//! Property definitions: what the host's inspector shows for each setting.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Editor widget used for a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyKind {
    OnOff,
    Boolean,
    Text,
    Number,
    Array,
    Object,
    Color,
    TextSelect,
}

/// Inspector section a property is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Advanced,
    Layout,
    Settings,
    Style,
    Theme,
}

/// Allowed numeric range for a number property.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl NumberRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A repeatable list of items, each described by `item`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListOptions {
    pub expandable: bool,
    /// Label for the n-th item; `{n}` is replaced with the 1-based index.
    pub item_label: Option<String>,
    pub item: Box<PropertyDef>,
}

impl ListOptions {
    pub fn item_label(&self, index: usize) -> Option<String> {
        self.item_label
            .as_ref()
            .map(|label| label.replace("{n}", &(index + 1).to_string()))
    }
}

/// Kind-specific editor options.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyOptions {
    /// A code editor for the given language.
    Code { language: String },
    Range(NumberRange),
    Select(Vec<SelectOption>),
    Placeholder(String),
    List(ListOptions),
    /// Named sub-fields of an object property.
    Fields(Vec<PropertyDef>),
}

impl Serialize for PropertyOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyOptions::Code { language } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "code")?;
                map.serialize_entry("language", language)?;
                map.end()
            }
            PropertyOptions::Range(range) => range.serialize(serializer),
            PropertyOptions::Select(options) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("options", options)?;
                map.end()
            }
            PropertyOptions::Placeholder(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("placeholder", text)?;
                map.end()
            }
            PropertyOptions::List(list) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("expandable", &list.expandable)?;
                if let Some(label) = &list.item_label {
                    map.serialize_entry("itemLabel", label)?;
                }
                map.serialize_entry("item", &list.item)?;
                map.end()
            }
            PropertyOptions::Fields(fields) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("item", &DefMap(fields))?;
                map.end()
            }
        }
    }
}

/// Binding hint shown when the property is bound to a formula.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BindingValidation {
    #[serde(rename = "type")]
    pub kind: String,
    pub tooltip: String,
}

/// Shows a property only while another property holds a given value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HiddenUnless {
    pub property: String,
    pub equals: Value,
}

impl HiddenUnless {
    pub fn new(property: impl Into<String>, equals: impl Into<Value>) -> Self {
        Self {
            property: property.into(),
            equals: equals.into(),
        }
    }

    /// Whether the guarded property is visible for `content`.
    pub fn is_visible(&self, content: &Value) -> bool {
        content.get(&self.property) == Some(&self.equals)
    }
}

/// One configurable property.
///
/// Built fluently:
///
/// ```rust
/// use gridbind_schema::{PropertyDef, PropertyKind, Section};
/// use serde_json::json;
///
/// let def = PropertyDef::new("pageSize", "Page Size", PropertyKind::Number)
///     .section(Section::Settings)
///     .default_value(json!(25))
///     .bindable();
///
/// assert_eq!(def.default_value, json!(25));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    #[serde(skip)]
    pub name: String,
    #[serde(serialize_with = "localized")]
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    pub default_value: Value,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bindable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PropertyOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_validation: Option<BindingValidation>,
    #[serde(
        rename = "propertyHelp",
        serialize_with = "help",
        skip_serializing_if = "Option::is_none"
    )]
    pub help_tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_unless: Option<HiddenUnless>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            section: None,
            default_value: Value::Null,
            bindable: false,
            options: None,
            binding_validation: None,
            help_tooltip: None,
            hidden_unless: None,
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn bindable(mut self) -> Self {
        self.bindable = true;
        self
    }

    pub fn options(mut self, options: PropertyOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn validation(mut self, kind: impl Into<String>, tooltip: impl Into<String>) -> Self {
        self.binding_validation = Some(BindingValidation {
            kind: kind.into(),
            tooltip: tooltip.into(),
        });
        self
    }

    pub fn help(mut self, tooltip: impl Into<String>) -> Self {
        self.help_tooltip = Some(tooltip.into());
        self
    }

    pub fn hidden_unless(mut self, property: impl Into<String>, equals: impl Into<Value>) -> Self {
        self.hidden_unless = Some(HiddenUnless::new(property, equals));
        self
    }

    /// The numeric range, for number properties that declare one.
    pub fn range(&self) -> Option<&NumberRange> {
        match &self.options {
            Some(PropertyOptions::Range(range)) => Some(range),
            _ => None,
        }
    }

    /// Clamps `value` into this property's range, if it has one.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        self.range().map(|range| range.clamp(value))
    }

    /// Sub-field lookup for object properties.
    pub fn field(&self, name: &str) -> Option<&PropertyDef> {
        match &self.options {
            Some(PropertyOptions::Fields(fields)) => fields.iter().find(|f| f.name == name),
            Some(PropertyOptions::List(list)) => list.item.field(name),
            _ => None,
        }
    }

    /// Whether the inspector shows this property for `content`.
    pub fn is_visible(&self, content: &Value) -> bool {
        self.hidden_unless
            .as_ref()
            .map_or(true, |rule| rule.is_visible(content))
    }
}

/// Serializes definitions as a name-keyed map, in declaration order.
pub(crate) struct DefMap<'a>(pub(crate) &'a [PropertyDef]);

impl Serialize for DefMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for def in self.0 {
            map.serialize_entry(&def.name, def)?;
        }
        map.end()
    }
}

fn localized<S: Serializer>(label: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("en", label)?;
    map.end()
}

fn help<S: Serializer>(tooltip: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("tooltip", tooltip)?;
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_property() {
        let def = PropertyDef::new("gridOptions", "Grid Options", PropertyKind::Text)
            .section(Section::Advanced)
            .default_value("{}")
            .options(PropertyOptions::Code {
                language: "javascript".into(),
            })
            .hidden_unless("advancedMode", true)
            .help("Custom options");

        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({
                "label": { "en": "Grid Options" },
                "type": "Text",
                "section": "advanced",
                "defaultValue": "{}",
                "options": { "type": "code", "language": "javascript" },
                "propertyHelp": { "tooltip": "Custom options" },
                "hiddenUnless": { "property": "advancedMode", "equals": true }
            })
        );
    }

    #[test]
    fn test_visibility() {
        let def = PropertyDef::new("x", "X", PropertyKind::Text).hidden_unless("advancedMode", true);
        assert!(def.is_visible(&json!({ "advancedMode": true })));
        assert!(!def.is_visible(&json!({ "advancedMode": false })));
        assert!(!def.is_visible(&json!({})));

        let always = PropertyDef::new("y", "Y", PropertyKind::Text);
        assert!(always.is_visible(&json!({})));
    }

    #[test]
    fn test_range_and_clamp() {
        let def = PropertyDef::new("n", "N", PropertyKind::Number)
            .options(PropertyOptions::Range(NumberRange::new(1.0, 10.0).step(1.0)));
        assert_eq!(def.clamp(0.0), Some(1.0));
        assert_eq!(def.clamp(5.0), Some(5.0));
        assert_eq!(def.clamp(99.0), Some(10.0));

        let text = PropertyDef::new("t", "T", PropertyKind::Text);
        assert_eq!(text.clamp(5.0), None);
    }

    #[test]
    fn test_list_item_label() {
        let list = ListOptions {
            expandable: true,
            item_label: Some("Column {n}".into()),
            item: Box::new(PropertyDef::new("", "Column", PropertyKind::Object)),
        };
        assert_eq!(list.item_label(0).as_deref(), Some("Column 1"));
        assert_eq!(list.item_label(4).as_deref(), Some("Column 5"));
    }

    #[test]
    fn test_fields_serialize_as_map() {
        let def = PropertyDef::new("onClick", "On Click", PropertyKind::Object).options(
            PropertyOptions::Fields(vec![
                PropertyDef::new("workflowId", "Workflow ID", PropertyKind::Text),
                PropertyDef::new("type", "Action Type", PropertyKind::Text).default_value("click"),
            ]),
        );
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["options"]["item"]["type"]["defaultValue"], json!("click"));
        assert_eq!(def.field("type").unwrap().default_value, json!("click"));
        assert!(def.field("missing").is_none());
    }
}
