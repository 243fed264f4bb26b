//! Turning content into the grid library's configuration.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use gridbind_columns::{columns_from_value, resolve_columns, ColumnDefaults, ResolvedColumn};
use gridbind_theme::{BaseTheme, ThemeParams, ThemeSelection};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::content::{AdvancedConfig, GridContent};
use crate::settings::{flag, number, text};

/// Color properties exposed as CSS variable overrides, with their variable.
pub const CSS_VARIABLES: &[(&str, &str)] = &[
    ("accentColor", "--ag-accent-color"),
    ("backgroundColor", "--ag-background-color"),
    ("headerBackgroundColor", "--ag-header-background-color"),
    ("headerTextColor", "--ag-header-text-color"),
    ("borderColor", "--ag-border-color"),
    ("selectedRowBackgroundColor", "--ag-selected-row-background-color"),
];

/// CSS custom properties layered over the theme, keyed by variable name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CssOverrides(BTreeMap<String, String>);

impl CssOverrides {
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders a CSS rule applying the overrides under `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{} {{\n", selector);
        for (variable, value) in &self.0 {
            let _ = writeln!(css, "  {}: {};", variable, value);
        }
        css.push('}');
        css
    }
}

/// Remote API endpoints the component writes to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub update: Option<String>,
    pub create: Option<String>,
    pub headers: BTreeMap<String, String>,
}

/// Fully resolved grid configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGrid {
    pub theme: ThemeSelection,
    pub css_overrides: CssOverrides,
    pub columns: Vec<ResolvedColumn>,
    /// Row class rules collected from all columns.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub row_class_rules: BTreeMap<String, String>,
    /// Extra grid options from advanced mode.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub grid_options: Map<String, Value>,
    pub row_height: u32,
    pub header_height: u32,
    pub page_size: u32,
    pub font_family: String,
    pub loading_message: String,
    pub auto_size_columns: bool,
    pub show_add_row_button: bool,
    pub checkbox_selection_field: String,
    pub row_data: Vec<Value>,
    pub endpoints: Endpoints,
    /// Enabled custom event handlers.
    pub events: Vec<String>,
}

impl GridContent {
    /// Resolves the content. Never fails: malformed values fall back to
    /// defaults and malformed advanced JSON is logged and ignored.
    pub fn resolve(&self) -> ResolvedGrid {
        self.resolve_with(self.advanced_lenient())
    }

    /// Resolves with an already-parsed advanced configuration, e.g. from
    /// [`GridContent::parse_advanced`].
    pub fn resolve_with(&self, advanced: AdvancedConfig) -> ResolvedGrid {
        let AdvancedConfig {
            grid_options,
            default_col_def,
            column_defs,
            custom_events,
        } = advanced;

        let column_defaults = ColumnDefaults::from_grid(
            flag("enableSorting", self.enable_sorting),
            flag("enableFiltering", self.enable_filtering),
        )
        .merge(
            default_col_def
                .as_ref()
                .map(ColumnDefaults::from_value)
                .unwrap_or_default(),
        );

        let descriptors = match column_defs {
            Some(code) => {
                tracing::debug!(count = code.len(), "using advanced column definitions");
                code
            }
            None => columns_from_value(&self.column_defs),
        };
        let columns = resolve_columns(&descriptors, &column_defaults);

        let row_class_rules = columns
            .iter()
            .flat_map(|c| c.row_class_rules.clone())
            .collect();

        ResolvedGrid {
            theme: self.theme_selection(),
            css_overrides: self.css_overrides(),
            columns,
            row_class_rules,
            grid_options,
            row_height: number("rowHeight", self.row_height),
            header_height: number("headerHeight", self.header_height),
            page_size: number("pageSize", self.page_size),
            font_family: text("fontFamily", self.font_family.as_deref()),
            loading_message: text("loadingMessage", self.loading_message.as_deref()),
            auto_size_columns: flag("autoSizeColumns", self.auto_size_columns),
            show_add_row_button: flag("showAddRowButton", self.show_add_row_button),
            checkbox_selection_field: text(
                "checkboxSelectionField",
                self.checkbox_selection_field.as_deref(),
            ),
            row_data: self.table_data.clone().unwrap_or_default(),
            endpoints: self.endpoints(),
            events: custom_events
                .into_iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(name, _)| name)
                .collect(),
        }
    }

    fn theme_selection(&self) -> ThemeSelection {
        let name = text("theme", self.theme.as_deref());
        let base = name.parse::<BaseTheme>().unwrap_or_else(|reason| {
            tracing::warn!(%reason, "falling back to the default base theme");
            BaseTheme::default()
        });
        let overrides = ThemeParams::from_value(&self.theme_params).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring theme parameters");
            ThemeParams::new()
        });
        ThemeSelection::choose(&self.custom_theme, base, &overrides)
    }

    fn css_overrides(&self) -> CssOverrides {
        let values = [
            &self.accent_color,
            &self.background_color,
            &self.header_background_color,
            &self.header_text_color,
            &self.border_color,
            &self.selected_row_background_color,
        ];
        CssOverrides(
            CSS_VARIABLES
                .iter()
                .zip(values)
                .map(|((property, variable), value)| {
                    (variable.to_string(), text(property, value.as_deref()))
                })
                .filter(|(_, value)| !value.is_empty())
                .collect(),
        )
    }

    fn endpoints(&self) -> Endpoints {
        let url = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let headers = self
            .xano_headers
            .iter()
            .flatten()
            .filter(|(name, value)| {
                !name.trim().is_empty() && !gridbind_theme::is_empty_value(value)
            })
            .map(|(name, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), value)
            })
            .collect();

        Endpoints {
            update: url(&self.xano_endpoint),
            create: url(&self.xano_create_endpoint),
            headers,
        }
    }
}
