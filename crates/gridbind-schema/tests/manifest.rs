//! The serialized manifest as the host reads it.

use gridbind_schema::fixtures::{render_detail_cell, sample_row_data};
use gridbind_schema::{manifest, PropertyKind, Section};
use proptest::prelude::*;
use serde_json::{json, Value};

fn manifest_json() -> Value {
    serde_json::to_value(manifest()).unwrap()
}

#[test]
fn top_level_shape() {
    let value = manifest_json();
    assert_eq!(value["name"], json!("AG Grid Component"));
    assert_eq!(
        value["editor"],
        json!({ "label": { "en": "AG Grid Xano" }, "icon": "table" })
    );
    assert_eq!(value["triggerEvents"].as_array().unwrap().len(), 8);
    assert_eq!(value["actions"].as_array().unwrap().len(), 5);
}

#[test]
fn every_property_serializes_with_label_and_type() {
    let value = manifest_json();
    let properties = value["properties"].as_object().unwrap();
    assert_eq!(properties.len(), manifest().properties().len());
    for (name, def) in properties {
        assert!(def["label"]["en"].is_string(), "{} has no label", name);
        assert!(def["type"].is_string(), "{} has no type", name);
        assert!(def.get("defaultValue").is_some(), "{} has no default", name);
    }
}

#[test]
fn repeated_properties_serialize_once_with_later_values() {
    let value = manifest_json();
    assert_eq!(value["properties"]["rowHeight"]["section"], json!("settings"));
    assert_eq!(
        value["properties"]["rowHeight"]["options"],
        json!({ "min": 10.0, "max": 200.0, "step": 1.0 })
    );
    assert_eq!(value["properties"]["pageSize"]["defaultValue"], json!(25));
}

#[test]
fn advanced_properties_are_code_editors() {
    for name in ["gridOptions", "columnDefsCode", "customEvents"] {
        let def = manifest().property(name).unwrap();
        assert_eq!(def.kind, PropertyKind::Text);
        assert_eq!(def.section, Some(Section::Advanced));
        let default = def.default_value.as_str().unwrap();
        assert!(serde_json::from_str::<Value>(default).is_ok(), "{} default is not JSON", name);
    }
}

#[test]
fn theme_section_holds_css_colors() {
    let colors: Vec<&str> = manifest()
        .properties()
        .iter()
        .filter(|p| p.section == Some(Section::Theme))
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        colors,
        vec![
            "accentColor",
            "backgroundColor",
            "headerBackgroundColor",
            "headerTextColor",
            "borderColor",
            "selectedRowBackgroundColor"
        ]
    );
}

#[test]
fn column_item_nested_schema() {
    let value = manifest_json();
    let item = &value["properties"]["columnDefs"]["options"]["item"];
    assert_eq!(item["defaultValue"]["width"], json!(100));
    assert_eq!(item["options"]["item"]["dataType"]["options"]["options"][5]["value"], json!("richtext"));
    assert_eq!(
        item["options"]["item"]["onClick"]["hiddenUnless"],
        json!({ "property": "dataType", "equals": "richtext" })
    );
}

#[test]
fn every_sample_row_renders() {
    for row in sample_row_data() {
        let html = render_detail_cell(&row).unwrap();
        assert!(html.starts_with("<div class=\"detail-cell\">"));
        assert!(html.contains(row["assignedTo"].as_str().unwrap()));
    }
}

proptest! {
    #[test]
    fn number_properties_clamp_into_range(value in -1.0e6f64..1.0e6) {
        for def in manifest().properties() {
            if let Some(range) = def.range() {
                let clamped = def.clamp(value).unwrap();
                prop_assert!(clamped >= range.min && clamped <= range.max);
            }
        }
    }
}
