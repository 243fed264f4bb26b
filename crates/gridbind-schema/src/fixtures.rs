//! Sample data for previews and tests.
//!
//! The rows describe a small task tracker; the column definitions match
//! them field for field.

use minijinja::{context, Environment};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::FixtureError;

/// Master-detail cell template. `data` is the row being expanded.
pub const DETAIL_CELL_TEMPLATE: &str = r#"<div class="detail-cell">
  <div class="detail-header">Task Details</div>
  <div class="detail-content">
    <div class="detail-row">
      <div class="detail-label">ID:</div>
      <div class="detail-value">{{ data.id }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Name:</div>
      <div class="detail-value">{{ data.name }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Category:</div>
      <div class="detail-value">{{ data.category }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Status:</div>
      <div class="detail-value">{{ data.status }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Date Created:</div>
      <div class="detail-value">{{ data.dateCreated }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Priority:</div>
      <div class="detail-value">{{ data.priority }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Assigned To:</div>
      <div class="detail-value">{{ data.assignedTo }}</div>
    </div>
    <div class="detail-row">
      <div class="detail-label">Description:</div>
      <div class="detail-value description">{{ data.description }}</div>
    </div>
  </div>
</div>
"#;

/// A one-click filter shown above the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresetFilter {
    pub label: String,
    pub field: String,
    pub value: String,
    pub operator: String,
    pub color: String,
}

impl PresetFilter {
    fn equals(label: &str, field: &str, value: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            field: field.to_string(),
            value: value.to_string(),
            operator: "equals".to_string(),
            color: color.to_string(),
        }
    }

    /// Whether `row` passes this filter.
    pub fn matches(&self, row: &Value) -> bool {
        match self.operator.as_str() {
            "equals" => row.get(&self.field).and_then(Value::as_str) == Some(self.value.as_str()),
            _ => false,
        }
    }
}

/// Column definitions for the sample rows, in the builder's format.
pub fn sample_column_defs() -> Value {
    let column = |header: &str, field: &str, width: u32, filter: &str| {
        json!({
            "headerName": header,
            "field": field,
            "width": width,
            "filter": filter,
            "sortable": true,
            "resizable": true
        })
    };

    let mut created = column("Date Created", "dateCreated", 150, "agDateColumnFilter");
    created["dataType"] = json!("date");
    let mut description = column("Description", "description", 250, "agTextColumnFilter");
    description["wrapText"] = json!(true);

    json!([
        column("ID", "id", 70, "agNumberColumnFilter"),
        column("Name", "name", 150, "agTextColumnFilter"),
        column("Category", "category", 120, "agTextColumnFilter"),
        column("Status", "status", 100, "agTextColumnFilter"),
        created,
        column("Priority", "priority", 100, "agTextColumnFilter"),
        column("Assigned To", "assignedTo", 150, "agTextColumnFilter"),
        description,
    ])
}

const TASKS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("Development", "In Progress", "2025-01-15", "High", "John Smith",
        "Implement user authentication feature with OAuth integration and secure token handling."),
    ("Design", "Completed", "2025-01-20", "Medium", "Jane Doe",
        "Create wireframes for the new dashboard layout."),
    ("Testing", "Pending", "2025-01-25", "Low", "Mike Johnson",
        "Perform QA testing on the new feature set."),
    ("Development", "In Progress", "2025-01-30", "High", "Sarah Williams",
        "Optimize database queries for better performance."),
    ("Marketing", "Completed", "2025-02-05", "Medium", "David Brown",
        "Prepare content for social media campaign."),
    ("Design", "Pending", "2025-02-10", "Low", "Emily Davis",
        "Design new icons for the mobile app."),
    ("Development", "In Progress", "2025-02-15", "High", "John Smith",
        "Implement real-time notification system."),
    ("Testing", "Completed", "2025-02-20", "Medium", "Jane Doe",
        "Conduct user acceptance testing for new features."),
    ("Marketing", "Pending", "2025-02-25", "Low", "Mike Johnson",
        "Analyze marketing campaign results."),
    ("Development", "In Progress", "2025-03-01", "High", "Sarah Williams",
        "Implement payment gateway integration."),
];

/// Ten flat task rows with ids 1 through 10.
pub fn sample_row_data() -> Vec<Value> {
    TASKS
        .iter()
        .enumerate()
        .map(|(i, (category, status, created, priority, assignee, description))| {
            json!({
                "id": i + 1,
                "name": format!("Task {}", i + 1),
                "category": category,
                "status": status,
                "dateCreated": created,
                "priority": priority,
                "assignedTo": assignee,
                "description": description
            })
        })
        .collect()
}

const TREE: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    ("Project A", "Development", "In Progress", "2025-01-10", "High", "Team Alpha",
        "Main development project", "Project A/Task 1,Project A/Task 2,Project A/Task 3"),
    ("Task 1", "Backend", "In Progress", "2025-01-15", "High", "John Smith",
        "Implement database schema", "Project A/Task 1"),
    ("Task 2", "Frontend", "Pending", "2025-01-20", "Medium", "Jane Doe",
        "Design user interface", "Project A/Task 2"),
    ("Task 3", "Testing", "Not Started", "2025-01-25", "Low", "Mike Johnson",
        "Create test cases", "Project A/Task 3"),
    ("Project B", "Design", "In Progress", "2025-02-01", "Medium", "Team Beta",
        "Design project for new product", "Project B/Task 1,Project B/Task 2"),
    ("Task 1", "UX", "In Progress", "2025-02-05", "High", "Sarah Williams",
        "Create wireframes", "Project B/Task 1"),
    ("Task 2", "UI", "Pending", "2025-02-10", "Medium", "David Brown",
        "Design visual elements", "Project B/Task 2"),
];

/// Seven hierarchical rows. `children` holds comma-separated data paths.
pub fn sample_tree_data() -> Vec<Value> {
    TREE.iter()
        .enumerate()
        .map(
            |(i, (name, category, status, created, priority, assignee, description, children))| {
                json!({
                    "id": i + 1,
                    "name": name,
                    "category": category,
                    "status": status,
                    "dateCreated": created,
                    "priority": priority,
                    "assignedTo": assignee,
                    "description": description,
                    "children": children
                })
            },
        )
        .collect()
}

/// Splits a tree row's `children` into data paths, each split on `/`.
pub fn tree_paths(row: &Value) -> Vec<Vec<&str>> {
    row.get("children")
        .and_then(Value::as_str)
        .map(|paths| {
            paths
                .split(',')
                .filter(|p| !p.trim().is_empty())
                .map(|p| p.split('/').map(str::trim).collect())
                .collect()
        })
        .unwrap_or_default()
}

pub fn sample_preset_filters() -> Vec<PresetFilter> {
    vec![
        PresetFilter::equals("High Priority", "priority", "High", "#ff4d4f"),
        PresetFilter::equals("In Progress", "status", "In Progress", "#1890ff"),
        PresetFilter::equals("Development", "category", "Development", "#52c41a"),
    ]
}

/// Renders the detail cell for `row`. Values are HTML-escaped.
pub fn render_detail_cell(row: &Value) -> Result<String, FixtureError> {
    let mut env = Environment::new();
    env.add_template("detail_cell.html", DETAIL_CELL_TEMPLATE)?;
    let template = env.get_template("detail_cell.html")?;
    Ok(template.render(context! { data => row })?)
}

/// Renders the detail cell for the sample row with the given id.
pub fn render_sample_detail(id: u64) -> Result<String, FixtureError> {
    let rows = sample_row_data();
    let row = rows
        .iter()
        .find(|row| row.get("id").and_then(Value::as_u64) == Some(id))
        .ok_or(FixtureError::UnknownRow(id))?;
    render_detail_cell(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_column_defs().as_array().unwrap().len(), 8);
        assert_eq!(sample_row_data().len(), 10);
        assert_eq!(sample_tree_data().len(), 7);
        assert_eq!(sample_preset_filters().len(), 3);
    }

    #[test]
    fn test_columns_cover_row_fields() {
        let rows = sample_row_data();
        let columns = sample_column_defs();
        for column in columns.as_array().unwrap() {
            let field = column["field"].as_str().unwrap();
            assert!(rows[0].get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_row_ids_and_names() {
        let rows = sample_row_data();
        assert_eq!(rows[0]["id"], json!(1));
        assert_eq!(rows[9]["name"], json!("Task 10"));
        assert_eq!(rows[9]["dateCreated"], json!("2025-03-01"));
    }

    #[test]
    fn test_tree_paths() {
        let tree = sample_tree_data();
        assert_eq!(
            tree_paths(&tree[0]),
            vec![
                vec!["Project A", "Task 1"],
                vec!["Project A", "Task 2"],
                vec!["Project A", "Task 3"],
            ]
        );
        assert_eq!(tree_paths(&tree[6]), vec![vec!["Project B", "Task 2"]]);
        assert!(tree_paths(&json!({})).is_empty());
    }

    #[test]
    fn test_preset_filters_match_rows() {
        let rows = sample_row_data();
        let filters = sample_preset_filters();
        let high = rows.iter().filter(|r| filters[0].matches(r)).count();
        let in_progress = rows.iter().filter(|r| filters[1].matches(r)).count();
        let development = rows.iter().filter(|r| filters[2].matches(r)).count();
        assert_eq!(high, 4);
        assert_eq!(in_progress, 4);
        assert_eq!(development, 4);
    }

    #[test]
    fn test_render_detail_cell() {
        let html = render_sample_detail(2).unwrap();
        assert!(html.contains(r#"<div class="detail-value">2</div>"#));
        assert!(html.contains("Create wireframes for the new dashboard layout."));
        assert!(html.contains("Jane Doe"));
    }

    #[test]
    fn test_render_escapes_html() {
        let html = render_detail_cell(&json!({ "id": 1, "name": "<b>x</b>" })).unwrap();
        assert!(html.contains("&lt;b&gt;x&lt;"));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn test_render_missing_fields_are_blank() {
        let html = render_detail_cell(&json!({})).unwrap();
        assert!(html.contains(r#"<div class="detail-value"></div>"#));
    }

    #[test]
    fn test_unknown_sample_row() {
        let err = render_sample_detail(99).unwrap_err();
        assert_eq!(err.to_string(), "no sample row with id 99");
    }
}
