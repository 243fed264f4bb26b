//! End-to-end column resolution from builder JSON.

use gridbind_columns::{
    columns_from_value, parse_columns, resolve_columns, ColumnDefaults, DataType, FilterSetting,
};
use serde_json::json;

const BUILDER_COLUMNS: &str = r#"[
    { "field": "id", "headerName": "ID", "width": 70, "editable": false, "filter": "agNumberColumnFilter" },
    { "field": "name", "headerName": "Name", "width": 150 },
    { "field": "created", "headerName": "Created", "dataType": "timestamp" },
    { "field": "done", "headerName": "", "dataType": "boolean", "filter": true },
    { "field": "status", "dataType": "dropdown", "dropdownOptions": ["Open", "Closed"] },
    {
        "field": "notes",
        "dataType": "richtext",
        "wrapText": true,
        "onClick": { "workflowId": "open-notes" }
    }
]"#;

#[test]
fn resolves_builder_columns_in_order() {
    let descriptors = parse_columns(BUILDER_COLUMNS).unwrap();
    let columns = resolve_columns(&descriptors, &ColumnDefaults::from_grid(true, true));

    let fields: Vec<&str> = columns.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, vec!["id", "name", "created", "done", "status", "notes"]);

    assert_eq!(columns[0].width, 70);
    assert!(!columns[0].editable);
    assert_eq!(columns[0].filter, FilterSetting::Named("agNumberColumnFilter".into()));

    assert_eq!(columns[2].cell_data_type, "dateString");
    assert_eq!(columns[2].filter, FilterSetting::Named("agDateColumnFilter".into()));

    // Empty header falls back to the field name.
    assert_eq!(columns[3].header_name, "done");
    assert_eq!(columns[3].cell_editor, "agCheckboxCellEditor");

    assert_eq!(columns[4].header_name, "status");
    assert_eq!(
        serde_json::to_value(&columns[4].cell_editor_params).unwrap(),
        json!({ "values": ["Open", "Closed"] })
    );

    let notes = serde_json::to_value(&columns[5]).unwrap();
    assert_eq!(notes["autoHeight"], json!(true));
    assert_eq!(notes["cellEditor"], json!("agLargeTextCellEditor"));
    assert_eq!(
        notes["onClick"],
        json!({ "workflowId": "open-notes", "type": "click" })
    );
}

#[test]
fn grid_toggles_apply_only_where_columns_are_silent() {
    let descriptors = parse_columns(BUILDER_COLUMNS).unwrap();
    let columns = resolve_columns(&descriptors, &ColumnDefaults::from_grid(false, false));

    assert!(columns.iter().all(|c| !c.sortable));
    assert_eq!(columns[0].filter, FilterSetting::Named("agNumberColumnFilter".into()));
    assert_eq!(columns[1].filter, FilterSetting::Enabled(false));
    assert_eq!(columns[3].filter, FilterSetting::Named("agTextColumnFilter".into()));
}

#[test]
fn columns_resolve_independently() {
    let descriptors = parse_columns(BUILDER_COLUMNS).unwrap();
    let defaults = ColumnDefaults::default();
    let together = resolve_columns(&descriptors, &defaults);

    for (index, descriptor) in descriptors.iter().enumerate() {
        let alone = resolve_columns(std::slice::from_ref(descriptor), &defaults);
        assert_eq!(alone[0], together[index]);
    }

    // Resolution leaves descriptors untouched.
    assert_eq!(descriptors, parse_columns(BUILDER_COLUMNS).unwrap());
}

#[test]
fn malformed_fields_fall_back_per_column() {
    let value = json!([
        { "field": "a", "width": "wide", "dataType": 4, "editable": "no" },
        { "field": "b", "width": 0 }
    ]);
    let columns = resolve_columns(&columns_from_value(&value), &ColumnDefaults::default());

    assert_eq!(columns[0].width, 100);
    assert_eq!(columns[0].data_type, DataType::Text);
    assert!(columns[0].editable);
    assert_eq!(columns[1].width, 50);
}

#[test]
fn strict_parse_reports_errors() {
    let err = parse_columns(r#"{ "columns": [] }"#).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse column definitions"));
}
