//! Base themes, icon sets, and the final theme handed to the grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::params::ThemeParams;
use crate::resolve::{ResolvedTheme, ThemeResolver};
use crate::value::is_empty_value;

/// The grid library's built-in base themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTheme {
    #[default]
    Quartz,
    Alpine,
    Balham,
}

impl BaseTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseTheme::Quartz => "quartz",
            BaseTheme::Alpine => "alpine",
            BaseTheme::Balham => "balham",
        }
    }

    /// The legacy CSS class for this theme, e.g. `ag-theme-quartz`.
    pub fn css_class(self) -> String {
        format!("ag-theme-{}", self.as_str())
    }
}

impl fmt::Display for BaseTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseTheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quartz" => Ok(BaseTheme::Quartz),
            "alpine" => Ok(BaseTheme::Alpine),
            "balham" => Ok(BaseTheme::Balham),
            other => Err(format!(
                "unknown base theme '{}'. Expected quartz, alpine or balham.",
                other
            )),
        }
    }
}

/// Icon set part composed onto the base theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconSet {
    Quartz,
    #[default]
    Alpine,
    Material,
}

/// A base theme with an icon set and fully resolved parameters.
///
/// This mirrors `themeQuartz.withPart(iconSetAlpine).withParams({...})`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTheme {
    pub base: BaseTheme,
    pub icon_set: IconSet,
    pub params: ResolvedTheme,
}

impl GridTheme {
    /// Resolves `overrides` onto `base` with the default icon set.
    pub fn new(base: BaseTheme, overrides: &ThemeParams) -> Self {
        Self::with_resolver(base, overrides, &ThemeResolver::default())
    }

    /// Same as [`GridTheme::new`] with an explicit resolver.
    pub fn with_resolver(
        base: BaseTheme,
        overrides: &ThemeParams,
        resolver: &ThemeResolver<'_>,
    ) -> Self {
        Self {
            base,
            icon_set: IconSet::default(),
            params: resolver.resolve(overrides),
        }
    }

    /// Like [`GridTheme::new`], but fails on reference cycles instead of
    /// falling back.
    pub fn try_new(base: BaseTheme, overrides: &ThemeParams) -> Result<Self> {
        Ok(Self {
            base,
            icon_set: IconSet::default(),
            params: ThemeResolver::default().try_resolve(overrides)?,
        })
    }

    /// Replaces the icon set.
    pub fn with_icon_set(mut self, icon_set: IconSet) -> Self {
        self.icon_set = icon_set;
        self
    }
}

/// The theme the grid should use.
///
/// A custom theme object supplied by the host (for example one exported
/// from the library's theme builder) is passed through untouched and
/// takes precedence over parameter overrides.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ThemeSelection {
    Custom { theme: Value },
    Parameters(GridTheme),
}

impl ThemeSelection {
    /// Picks the custom theme when it is non-empty, otherwise resolves
    /// `overrides` onto `base`.
    pub fn choose(custom: &Value, base: BaseTheme, overrides: &ThemeParams) -> Self {
        if custom.is_object() && !is_empty_value(custom) {
            ThemeSelection::Custom {
                theme: custom.clone(),
            }
        } else {
            ThemeSelection::Parameters(GridTheme::new(base, overrides))
        }
    }

    /// The resolved parameters, unless a custom theme was chosen.
    pub fn params(&self) -> Option<&ResolvedTheme> {
        match self {
            ThemeSelection::Custom { .. } => None,
            ThemeSelection::Parameters(theme) => Some(&theme.params),
        }
    }
}
