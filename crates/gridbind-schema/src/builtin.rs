//! The grid component's manifest.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::manifest::ComponentManifest;
use crate::property::{
    ListOptions, NumberRange, PropertyDef, PropertyKind, PropertyOptions, Section, SelectOption,
};

static MANIFEST: Lazy<ComponentManifest> = Lazy::new(build);

/// The component manifest, built once.
pub fn manifest() -> &'static ComponentManifest {
    &MANIFEST
}

fn code(language: &str) -> PropertyOptions {
    PropertyOptions::Code {
        language: language.to_string(),
    }
}

fn range(min: f64, max: f64) -> PropertyOptions {
    PropertyOptions::Range(NumberRange::new(min, max))
}

fn stepped(min: f64, max: f64) -> PropertyOptions {
    PropertyOptions::Range(NumberRange::new(min, max).step(1.0))
}

fn placeholder(text: &str) -> PropertyOptions {
    PropertyOptions::Placeholder(text.to_string())
}

fn build() -> ComponentManifest {
    use PropertyKind::*;

    let mut m = ComponentManifest::new("AG Grid Component", "AG Grid Xano", "table");

    // Advanced
    m.declare(
        PropertyDef::new("advancedMode", "Advanced Mode", OnOff)
            .section(Section::Advanced)
            .default_value(false)
            .help("Enable to use custom AG Grid configuration"),
    )
    .declare(
        PropertyDef::new("gridOptions", "Grid Options", Text)
            .section(Section::Advanced)
            .default_value(r#"{"defaultColDef":{"sortable":true,"filter":true}}"#)
            .options(code("javascript"))
            .hidden_unless("advancedMode", true)
            .help("Custom AG Grid options in JSON format"),
    )
    .declare(
        PropertyDef::new("columnDefsCode", "Column Definitions Code", Text)
            .section(Section::Advanced)
            .default_value(
                r##"[{"field":"name","headerName":"Name","width":150,"cellStyle":{"color":"#2196F3","fontWeight":"bold"}}]"##,
            )
            .options(code("javascript"))
            .hidden_unless("advancedMode", true)
            .help("Custom column definitions with full AG Grid features"),
    )
    .declare(
        PropertyDef::new("customEvents", "Custom Events", Text)
            .section(Section::Advanced)
            .default_value(r#"{"onCellClicked":true,"onRowSelected":true,"onFilterChanged":true}"#)
            .options(code("javascript"))
            .hidden_unless("advancedMode", true)
            .help("Custom event handlers for the grid"),
    );

    // Layout
    m.declare(
        PropertyDef::new("rowHeight", "Row Height", Number)
            .section(Section::Layout)
            .default_value(40)
            .options(range(25.0, 100.0)),
    )
    .declare(
        PropertyDef::new("headerHeight", "Header Height", Number)
            .section(Section::Layout)
            .default_value(40)
            .options(range(25.0, 100.0)),
    )
    .declare(
        PropertyDef::new("pageSize", "Page Size", Number)
            .section(Section::Layout)
            .default_value(10)
            .options(range(5.0, 100.0)),
    )
    .declare(
        PropertyDef::new("checkboxSelectionField", "Selection Column", Text)
            .section(Section::Layout)
            .default_value("_checkbox")
            .help("Field name for checkbox selection column"),
    );

    // Data
    m.declare(
        PropertyDef::new("tableData", "Table Data", Array)
            .section(Section::Settings)
            .bindable()
            .default_value(json!([]))
            .validation("Array", "Bind to an array of objects to display in the grid")
            .help("The data to display in the grid"),
    )
    .declare(
        PropertyDef::new("columnDefs", "Column Definitions", Array)
            .section(Section::Settings)
            .bindable()
            .default_value(json!([]))
            .options(PropertyOptions::List(ListOptions {
                expandable: true,
                item_label: Some("Column {n}".to_string()),
                item: Box::new(column_item()),
            }))
            .validation("Array", "Array of column definitions for the grid")
            .help("Define the columns to display in the grid"),
    )
    .declare(
        PropertyDef::new("xanoEndpoint", "Xano Update Endpoint", Text)
            .section(Section::Settings)
            .bindable()
            .default_value("")
            .validation("string", "The Xano API endpoint URL for updating records")
            .help("Enter the full URL of your Xano update endpoint"),
    )
    .declare(
        PropertyDef::new("xanoCreateEndpoint", "Xano Create Record Endpoint", Text)
            .section(Section::Settings)
            .bindable()
            .default_value("")
            .validation("string", "The Xano API endpoint URL for creating new records")
            .help("Enter the full URL of your Xano endpoint for creating new records"),
    )
    .declare(
        PropertyDef::new("xanoHeaders", "Xano Headers", Object)
            .section(Section::Settings)
            .bindable()
            .default_value(json!({}))
            .validation("object", "Custom headers to send with Xano requests")
            .help("Additional headers for Xano API calls (e.g., authorization)"),
    );

    // Display
    m.declare(
        PropertyDef::new("fontFamily", "Grid Font Family", Text)
            .section(Section::Style)
            .bindable()
            .default_value("Arial, sans-serif")
            .validation("string", "Set the font family for the grid")
            .help("Customize the font used in the grid"),
    )
    .declare(
        PropertyDef::new("rowHeight", "Row Height", Number)
            .section(Section::Settings)
            .bindable()
            .default_value(25)
            .options(stepped(10.0, 200.0))
            .validation("number", "Row height in pixels")
            .help("Set the height for each row in the grid"),
    )
    .declare(
        PropertyDef::new("pageSize", "Page Size", Number)
            .section(Section::Settings)
            .bindable()
            .default_value(25)
            .options(stepped(1.0, 1000.0))
            .validation("number", "Number of rows to display per page")
            .help("Set how many rows to show on each page"),
    )
    .declare(
        PropertyDef::new("enableFiltering", "Enable Filtering", OnOff)
            .section(Section::Settings)
            .bindable()
            .default_value(true)
            .validation("boolean", "Enable or disable column filtering")
            .help("Allow users to filter data in columns"),
    )
    .declare(
        PropertyDef::new("enableSorting", "Enable Sorting", OnOff)
            .section(Section::Settings)
            .bindable()
            .default_value(true)
            .validation("boolean", "Enable or disable column sorting")
            .help("Allow users to sort data in columns"),
    )
    .declare(
        PropertyDef::new("loadingMessage", "Loading Message", Text)
            .section(Section::Settings)
            .bindable()
            .default_value("Updating...")
            .validation("string", "Message to display during updates")
            .help("Customize the loading message shown during updates"),
    )
    .declare(
        PropertyDef::new("autoSizeColumns", "Auto Size Columns", OnOff)
            .section(Section::Settings)
            .bindable()
            .default_value(false),
    )
    .declare(
        PropertyDef::new("showAddRowButton", "Show Add Row Button", OnOff)
            .section(Section::Settings)
            .bindable()
            .default_value(false)
            .help("Show a button to add new blank rows to the grid"),
    );

    // CSS variable overrides
    for (name, label, default) in [
        ("accentColor", "Accent Color", "#2196F3"),
        ("backgroundColor", "Background Color", "#FFFFFF"),
        ("headerBackgroundColor", "Header Background Color", "#F5F5F5"),
        ("headerTextColor", "Header Text Color", "#000000"),
        ("borderColor", "Border Color", "#E0E0E0"),
        ("selectedRowBackgroundColor", "Selected Row Background Color", ""),
    ] {
        m.declare(
            PropertyDef::new(name, label, Color)
                .section(Section::Theme)
                .bindable()
                .default_value(default),
        );
    }

    // Theme selection
    m.declare(
        PropertyDef::new("theme", "Grid Theme", TextSelect)
            .section(Section::Style)
            .bindable()
            .default_value("quartz")
            .options(PropertyOptions::Select(vec![
                SelectOption::new("quartz", "Quartz"),
                SelectOption::new("alpine", "Alpine"),
                SelectOption::new("balham", "Balham"),
            ]))
            .validation(
                "string",
                "The visual theme for the grid (for legacy CSS usage)",
            )
            .help("Select the visual style for the grid if not using custom theme parameters"),
    )
    .declare(
        PropertyDef::new("customTheme", "Custom Theme", Object)
            .section(Section::Style)
            .bindable()
            .default_value(json!(null))
            .validation(
                "object",
                "Pass a custom AG Grid theme object (generated via the Theme Builder/Theming API)",
            )
            .help("Import a theme object such as one generated from the AG Grid Theme Builder"),
    )
    .declare(
        PropertyDef::new("themeParams", "Theme Parameters", Object)
            .section(Section::Style)
            .bindable()
            .default_value(json!({}))
            .validation(
                "object",
                "Theme parameter overrides for AG Grid (e.g., accentColor, headerTextColor)",
            )
            .help("Provide custom theme parameters to merge with the default theme"),
    );

    m.add_trigger(
        "cellValueChanged",
        "On cell value changed",
        json!({ "field": "", "oldValue": null, "newValue": null, "rowData": {} }),
    )
    .add_trigger("rowSelected", "On row selected", json!({ "rowData": {} }))
    .add_trigger("rowDeselected", "On row deselected", json!({ "rowData": {} }))
    .add_trigger("rowAdded", "On row added", json!({ "newRow": {} }))
    .add_trigger("recordCreated", "On record created", json!({ "newRecord": {} }))
    .add_trigger("error", "On error", json!({ "message": "", "type": "" }))
    .add_trigger("updateStart", "On update start", json!({ "rowData": {} }))
    .add_trigger(
        "updateComplete",
        "On update complete",
        json!({ "success": true, "data": {} }),
    );

    m.add_action("refreshData", "Refresh Data")
        .add_action("exportToCSV", "Export to CSV")
        .add_action("clearSelection", "Clear Selection")
        .add_action("retryUpdate", "Retry Update")
        .add_action("addNewRecord", "Add New Record");

    m
}

/// Schema for one entry of `columnDefs`.
fn column_item() -> PropertyDef {
    use PropertyKind::*;

    let data_types = PropertyOptions::Select(vec![
        SelectOption::new("text", "Text"),
        SelectOption::new("timestamp", "Timestamp"),
        SelectOption::new("date", "Date Only"),
        SelectOption::new("boolean", "Boolean"),
        SelectOption::new("dropdown", "Dropdown"),
        SelectOption::new("richtext", "Rich Text"),
    ]);

    PropertyDef::new("column", "Column", Object)
        .default_value(json!({
            "field": "",
            "headerName": "",
            "editable": true,
            "width": 100,
            "sortable": true,
            "filter": true,
            "dataType": "text",
            "dropdownOptions": [],
            "wrapText": false
        }))
        .options(PropertyOptions::Fields(vec![
            PropertyDef::new("field", "Field", Text).options(placeholder("Data field name")),
            PropertyDef::new("rowClassRules", "Row Style Rules", Object).options(
                PropertyOptions::Fields(vec![
                    PropertyDef::new("className", "CSS Class", Text),
                    PropertyDef::new("condition", "Condition", Text)
                        .options(placeholder(r#"params.data.status === "active""#)),
                ]),
            ),
            PropertyDef::new("headerName", "Header", Text)
                .options(placeholder("Column header name")),
            PropertyDef::new("editable", "Editable", Boolean),
            PropertyDef::new("width", "Width", Number).options(range(50.0, 500.0)),
            PropertyDef::new("sortable", "Sortable", Boolean),
            PropertyDef::new("filter", "Filter", Boolean),
            PropertyDef::new("dataType", "Data Type", TextSelect)
                .default_value("text")
                .options(data_types),
            PropertyDef::new("onClick", "On Click Action", Object)
                .default_value(json!({}))
                .options(PropertyOptions::Fields(vec![
                    PropertyDef::new("workflowId", "Workflow ID", Text)
                        .options(placeholder("Enter workflow ID")),
                    PropertyDef::new("type", "Action Type", Text)
                        .default_value("click")
                        .options(placeholder("Action type (e.g., click, edit)")),
                ]))
                .hidden_unless("dataType", "richtext"),
            PropertyDef::new("dropdownOptions", "Dropdown Options", Array)
                .default_value(json!([]))
                .options(PropertyOptions::List(ListOptions {
                    expandable: true,
                    item_label: Some("Option {n}".to_string()),
                    item: Box::new(PropertyDef::new("option", "Option", Text)),
                })),
            PropertyDef::new("wrapText", "Wrap Text", Boolean).default_value(false),
        ]))
}
