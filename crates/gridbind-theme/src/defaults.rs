//! Library default values for every recognized parameter.
//!
//! Defaults are an immutable value. The built-in table is created once on
//! first use and cannot be changed afterwards; callers that need different
//! defaults build their own [`ThemeDefaults`] and pass it to a
//! [`ThemeResolver`](crate::ThemeResolver).

use once_cell::sync::Lazy;
use serde_json::json;

use crate::error::{Result, ThemeError};
use crate::param::ThemeParam;
use crate::params::ThemeParams;
use crate::resolve::{resolve_layers, ResolvedTheme};
use crate::value::ParamValue;

static BUILTIN: Lazy<ThemeDefaults> = Lazy::new(|| {
    ThemeDefaults::new(builtin_entries()).expect("built-in theme defaults are complete and acyclic")
});

fn builtin_entries() -> Vec<(ThemeParam, ParamValue)> {
    use ThemeParam::*;

    vec![
        (AccentColor, json!("#0086F4").into()),
        (BackgroundColor, json!("#F1EDE1").into()),
        (BorderColor, json!("#98968F").into()),
        (BorderRadius, json!(0).into()),
        (BrowserColorScheme, json!("light").into()),
        (ChromeBackgroundColor, ParamValue::Ref(BackgroundColor)),
        (FontFamily, json!({ "googleFont": "Pixelify Sans" }).into()),
        (FontSize, json!(15).into()),
        (ForegroundColor, json!("#605E57").into()),
        (HeaderBackgroundColor, json!("#E4DAD1").into()),
        (HeaderFontSize, json!(15).into()),
        (HeaderFontWeight, json!(700).into()),
        (HeaderTextColor, json!("#3C3A35").into()),
        (RowVerticalPaddingScale, json!(1.2).into()),
        (Spacing, json!(5).into()),
        (WrapperBorderRadius, json!(0).into()),
    ]
}

/// A complete, acyclic table of default parameter values.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeDefaults {
    /// One entry per parameter, indexed by [`ThemeParam::index`].
    values: Vec<ParamValue>,
    /// The defaults resolved against no overrides.
    resolved: ResolvedTheme,
}

impl ThemeDefaults {
    /// Builds a default table.
    ///
    /// Unlike overrides, defaults are taken verbatim: `0` is a perfectly
    /// good default border radius.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::IncompleteDefaults`] if any parameter has no entry
    /// - [`ThemeError::CycleDetected`] if the references form a cycle
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ThemeParam, ParamValue)>,
    {
        let mut slots: Vec<Option<ParamValue>> = vec![None; ThemeParam::COUNT];
        for (param, value) in entries {
            slots[param.index()] = Some(value);
        }

        let missing: Vec<String> = ThemeParam::ALL
            .iter()
            .filter(|p| slots[p.index()].is_none())
            .map(|p| p.as_str().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ThemeError::IncompleteDefaults { missing });
        }

        let values: Vec<ParamValue> = slots.into_iter().flatten().collect();
        let resolved = resolve_layers(&ThemeParams::new(), &values).map_err(|cycle| {
            ThemeError::CycleDetected {
                path: cycle.iter().map(|p| p.as_str().to_string()).collect(),
            }
        })?;

        Ok(Self { values, resolved })
    }

    /// The built-in library defaults.
    pub fn builtin() -> &'static ThemeDefaults {
        &BUILTIN
    }

    /// The default value for `param`.
    pub fn get(&self, param: ThemeParam) -> &ParamValue {
        &self.values[param.index()]
    }

    /// The defaults resolved with no overrides applied.
    pub fn resolved(&self) -> &ResolvedTheme {
        &self.resolved
    }

    /// Returns a copy of these defaults with some entries replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::CycleDetected`] if the replacement introduces a
    /// reference cycle.
    pub fn with(
        &self,
        replacements: impl IntoIterator<Item = (ThemeParam, ParamValue)>,
    ) -> Result<Self> {
        let mut entries: Vec<(ThemeParam, ParamValue)> = ThemeParam::ALL
            .iter()
            .map(|p| (*p, self.get(*p).clone()))
            .collect();
        entries.extend(replacements);
        Self::new(entries)
    }

    pub(crate) fn values(&self) -> &[ParamValue] {
        &self.values
    }
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
