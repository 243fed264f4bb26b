//! The component manifest and its lookups.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::property::{DefMap, PropertyDef};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditorInfo {
    #[serde(serialize_with = "localized")]
    pub label: String,
    pub icon: String,
}

/// An event the component emits, with an example payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TriggerEvent {
    pub name: String,
    #[serde(serialize_with = "localized")]
    pub label: String,
    pub event: Value,
}

/// An action the host can invoke on the component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Action {
    pub name: String,
    #[serde(serialize_with = "localized")]
    pub label: String,
    pub action: String,
}

/// Everything the host needs to know about the component.
///
/// Properties keep declaration order. Declaring a property twice replaces
/// the earlier definition in place, the way a repeated key behaves in an
/// object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentManifest {
    pub name: String,
    pub editor: EditorInfo,
    properties: Vec<PropertyDef>,
    trigger_events: Vec<TriggerEvent>,
    actions: Vec<Action>,
}

impl ComponentManifest {
    pub fn new(name: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            editor: EditorInfo {
                label: label.into(),
                icon: icon.into(),
            },
            properties: Vec::new(),
            trigger_events: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Adds a property; a later declaration with the same name wins.
    pub fn declare(&mut self, def: PropertyDef) -> &mut Self {
        match self.properties.iter_mut().find(|p| p.name == def.name) {
            Some(existing) => *existing = def,
            None => self.properties.push(def),
        }
        self
    }

    pub fn trigger(&self, name: &str) -> Option<&TriggerEvent> {
        self.trigger_events.iter().find(|t| t.name == name)
    }

    pub fn add_trigger(&mut self, name: &str, label: &str, event: Value) -> &mut Self {
        self.trigger_events.push(TriggerEvent {
            name: name.to_string(),
            label: label.to_string(),
            event,
        });
        self
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Adds an action whose dispatch name equals its own name.
    pub fn add_action(&mut self, name: &str, label: &str) -> &mut Self {
        self.actions.push(Action {
            name: name.to_string(),
            label: label.to_string(),
            action: name.to_string(),
        });
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    pub fn trigger_events(&self) -> &[TriggerEvent] {
        &self.trigger_events
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Every property's default, keyed by property name.
    pub fn default_content(&self) -> Value {
        let content: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.name.clone(), p.default_value.clone()))
            .collect();
        Value::Object(content)
    }

    /// Names of the properties the inspector shows for `content`.
    pub fn visible_properties<'a>(&'a self, content: &'a Value) -> impl Iterator<Item = &'a str> {
        self.properties
            .iter()
            .filter(move |p| p.is_visible(content))
            .map(|p| p.name.as_str())
    }
}

impl Serialize for ComponentManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComponentManifest", 5)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("editor", &self.editor)?;
        state.serialize_field("properties", &DefMap(&self.properties))?;
        state.serialize_field("triggerEvents", &self.trigger_events)?;
        state.serialize_field("actions", &self.actions)?;
        state.end()
    }
}

fn localized<S: Serializer>(label: &str, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("en", label)?;
    map.end()
}
