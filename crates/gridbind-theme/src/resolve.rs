//! Resolution of overrides against defaults.
//!
//! For each recognized parameter the effective value is the override when
//! one is present, otherwise the default. References are then chased to
//! their target's resolved value, depth first, so a reference always sees
//! its target after the target's own override has been applied:
//!
//! ```rust
//! use gridbind_theme::{resolve_theme, ThemeParam, ThemeParams};
//! use serde_json::json;
//!
//! let overrides = ThemeParams::new().set(ThemeParam::BackgroundColor, json!("#123456"));
//! let theme = resolve_theme(&overrides);
//!
//! // chromeBackgroundColor defaults to a reference to backgroundColor.
//! assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#123456"));
//! ```
//!
//! ## Cycles
//!
//! Defaults are acyclic by construction. Overrides can introduce cycles
//! (`accentColor -> borderColor -> accentColor`). [`ThemeResolver::try_resolve`]
//! reports them; [`ThemeResolver::resolve`] drops the override references on
//! the cycle and tries again, so it always produces a complete theme.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::defaults::ThemeDefaults;
use crate::error::{Result, ThemeError};
use crate::param::ThemeParam;
use crate::params::ThemeParams;
use crate::value::ParamValue;

/// A fully resolved theme: one literal value per recognized parameter.
///
/// Serializes to the object the grid library's `withParams` expects.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    /// Indexed by [`ThemeParam::index`]; always `ThemeParam::COUNT` long.
    values: Vec<Value>,
}

impl ResolvedTheme {
    /// The resolved value of `param`.
    pub fn get(&self, param: ThemeParam) -> &Value {
        &self.values[param.index()]
    }

    /// Iterates over every parameter and its value in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeParam, &Value)> {
        ThemeParam::ALL.iter().copied().zip(self.values.iter())
    }

    /// Number of parameters; always [`ThemeParam::COUNT`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; present for API symmetry with [`ThemeParams`].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converts the resolved values back into an override set.
    ///
    /// Resolving the result again yields this theme unchanged. Going
    /// through the serialized form instead (`serde_json::to_value` then
    /// [`ThemeParams::from_value`]) filters falsy values, so a `0` reached
    /// through a reference falls back to its parameter's default there.
    pub fn to_params(&self) -> ThemeParams {
        let mut params = ThemeParams::new();
        for (param, value) in self.iter() {
            params.insert_resolved(param, value.clone());
        }
        params
    }
}

impl Serialize for ResolvedTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (param, value) in self.iter() {
            map.serialize_entry(param.as_str(), value)?;
        }
        map.end()
    }
}

/// Resolves override sets against a default table.
#[derive(Clone, Copy, Debug)]
pub struct ThemeResolver<'a> {
    defaults: &'a ThemeDefaults,
}

impl<'a> ThemeResolver<'a> {
    /// Creates a resolver over the given defaults.
    pub fn new(defaults: &'a ThemeDefaults) -> Self {
        Self { defaults }
    }

    /// The defaults this resolver falls back to.
    pub fn defaults(&self) -> &'a ThemeDefaults {
        self.defaults
    }

    /// Resolves `overrides`, failing on reference cycles.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::CycleDetected`] with the names along the cycle.
    pub fn try_resolve(&self, overrides: &ThemeParams) -> Result<ResolvedTheme> {
        resolve_layers(overrides, self.defaults.values()).map_err(|cycle| {
            ThemeError::CycleDetected {
                path: cycle.iter().map(|p| p.as_str().to_string()).collect(),
            }
        })
    }

    /// Resolves `overrides`. Never fails.
    ///
    /// Override references that take part in a cycle are discarded and
    /// their parameters fall back to the defaults.
    pub fn resolve(&self, overrides: &ThemeParams) -> ResolvedTheme {
        if overrides.is_empty() {
            return self.defaults.resolved().clone();
        }

        let mut working = overrides.clone();
        loop {
            let cycle = match resolve_layers(&working, self.defaults.values()) {
                Ok(theme) => return theme,
                Err(cycle) => cycle,
            };

            let mut dropped = 0;
            for param in &cycle {
                if working.get(*param).and_then(ParamValue::target).is_some() {
                    working.remove(*param);
                    dropped += 1;
                }
            }
            tracing::warn!(
                cycle = %cycle.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(" -> "),
                dropped,
                "discarding cyclic theme references"
            );
            if dropped == 0 {
                return self.defaults.resolved().clone();
            }
        }
    }
}

impl Default for ThemeResolver<'static> {
    fn default() -> Self {
        Self::new(ThemeDefaults::builtin())
    }
}

/// Resolves `overrides` against the built-in defaults.
///
/// This is a total function: every recognized parameter gets a value,
/// and empty, malformed or cyclic overrides fall back to the defaults.
///
/// ```rust
/// use gridbind_theme::{resolve_theme, ThemeParam, ThemeParams};
/// use serde_json::json;
///
/// let theme = resolve_theme(&ThemeParams::new());
/// assert_eq!(theme.len(), ThemeParam::COUNT);
/// assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#0086F4"));
/// ```
pub fn resolve_theme(overrides: &ThemeParams) -> ResolvedTheme {
    ThemeResolver::default().resolve(overrides)
}

/// Resolves `overrides` layered over `defaults`.
///
/// On a cycle, returns the parameters along it with the first one
/// repeated at the end.
pub(crate) fn resolve_layers(
    overrides: &ThemeParams,
    defaults: &[ParamValue],
) -> std::result::Result<ResolvedTheme, Vec<ThemeParam>> {
    let mut resolved: Vec<Option<Value>> = vec![None; ThemeParam::COUNT];
    let mut stack: Vec<ThemeParam> = Vec::new();

    for param in ThemeParam::ALL {
        resolve_one(param, overrides, defaults, &mut resolved, &mut stack)?;
    }

    Ok(ResolvedTheme {
        values: resolved.into_iter().map(Option::unwrap_or_default).collect(),
    })
}

fn resolve_one(
    param: ThemeParam,
    overrides: &ThemeParams,
    defaults: &[ParamValue],
    resolved: &mut [Option<Value>],
    stack: &mut Vec<ThemeParam>,
) -> std::result::Result<Value, Vec<ThemeParam>> {
    if let Some(value) = &resolved[param.index()] {
        return Ok(value.clone());
    }
    if let Some(start) = stack.iter().position(|p| *p == param) {
        let mut cycle = stack[start..].to_vec();
        cycle.push(param);
        return Err(cycle);
    }

    let effective = overrides
        .get(param)
        .unwrap_or(&defaults[param.index()]);

    let value = match effective {
        ParamValue::Literal(value) => value.clone(),
        ParamValue::Ref(target) => {
            stack.push(param);
            let value = resolve_one(*target, overrides, defaults, resolved, stack)?;
            stack.pop();
            value
        }
    };

    resolved[param.index()] = Some(value.clone());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_overrides_yield_defaults() {
        let theme = resolve_theme(&ThemeParams::new());
        assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#0086F4"));
        assert_eq!(theme.get(ThemeParam::BorderRadius), &json!(0));
        assert_eq!(theme.get(ThemeParam::HeaderFontWeight), &json!(700));
        assert_eq!(theme.get(ThemeParam::RowVerticalPaddingScale), &json!(1.2));
        assert_eq!(
            theme.get(ThemeParam::ChromeBackgroundColor),
            &json!("#F1EDE1")
        );
    }

    #[test]
    fn test_override_wins() {
        let overrides = ThemeParams::new()
            .set(ThemeParam::AccentColor, json!("#FF0000"))
            .set(ThemeParam::FontSize, json!(18));
        let theme = resolve_theme(&overrides);
        assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#FF0000"));
        assert_eq!(theme.get(ThemeParam::FontSize), &json!(18));
        assert_eq!(theme.get(ThemeParam::BorderColor), &json!("#98968F"));
    }

    #[test]
    fn test_chrome_tracks_background_override() {
        let overrides = ThemeParams::new().set(ThemeParam::BackgroundColor, json!("#123456"));
        let theme = resolve_theme(&overrides);
        assert_eq!(
            theme.get(ThemeParam::ChromeBackgroundColor),
            &json!("#123456")
        );
    }

    #[test]
    fn test_explicit_chrome_override_wins_over_reference() {
        let overrides = ThemeParams::new()
            .set(ThemeParam::BackgroundColor, json!("#123456"))
            .set(ThemeParam::ChromeBackgroundColor, json!("#654321"));
        let theme = resolve_theme(&overrides);
        assert_eq!(
            theme.get(ThemeParam::ChromeBackgroundColor),
            &json!("#654321")
        );
    }

    #[test]
    fn test_override_reference_chains() {
        // headerTextColor -> chromeBackgroundColor -> backgroundColor
        let overrides = ThemeParams::new()
            .set(ThemeParam::HeaderTextColor, ThemeParam::ChromeBackgroundColor)
            .set(ThemeParam::BackgroundColor, json!("#ABCDEF"));
        let theme = resolve_theme(&overrides);
        assert_eq!(theme.get(ThemeParam::HeaderTextColor), &json!("#ABCDEF"));
    }

    #[test]
    fn test_try_resolve_reports_cycle() {
        let overrides = ThemeParams::new()
            .set(ThemeParam::AccentColor, ThemeParam::BorderColor)
            .set(ThemeParam::BorderColor, ThemeParam::AccentColor);
        let err = ThemeResolver::default().try_resolve(&overrides).unwrap_err();
        match err {
            ThemeError::CycleDetected { path } => {
                assert_eq!(path, vec!["accentColor", "borderColor", "accentColor"]);
            }
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_drops_cyclic_references() {
        let overrides = ThemeParams::new()
            .set(ThemeParam::AccentColor, ThemeParam::BorderColor)
            .set(ThemeParam::BorderColor, ThemeParam::AccentColor)
            .set(ThemeParam::Spacing, json!(8));
        let theme = resolve_theme(&overrides);
        assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#0086F4"));
        assert_eq!(theme.get(ThemeParam::BorderColor), &json!("#98968F"));
        assert_eq!(theme.get(ThemeParam::Spacing), &json!(8));
    }

    #[test]
    fn test_cycle_through_default_reference() {
        // backgroundColor -> chromeBackgroundColor, whose default points back.
        let overrides =
            ThemeParams::new().set(ThemeParam::BackgroundColor, ThemeParam::ChromeBackgroundColor);
        assert!(ThemeResolver::default().try_resolve(&overrides).is_err());

        let theme = resolve_theme(&overrides);
        assert_eq!(theme.get(ThemeParam::BackgroundColor), &json!("#F1EDE1"));
        assert_eq!(
            theme.get(ThemeParam::ChromeBackgroundColor),
            &json!("#F1EDE1")
        );
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = ThemeDefaults::builtin()
            .with(vec![(ThemeParam::Spacing, json!(12).into())])
            .unwrap();
        let resolver = ThemeResolver::new(&defaults);
        let theme = resolver.resolve(&ThemeParams::new());
        assert_eq!(theme.get(ThemeParam::Spacing), &json!(12));
    }

    #[test]
    fn test_to_params_round_trip_is_stable() {
        let overrides = ThemeParams::new()
            .set(ThemeParam::BackgroundColor, json!("#123456"))
            .set(ThemeParam::HeaderFontWeight, json!("bold"));
        let first = resolve_theme(&overrides);
        let second = resolve_theme(&first.to_params());
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_params_keeps_zero_reached_through_reference() {
        let overrides = ThemeParams::new().set(ThemeParam::Spacing, ThemeParam::BorderRadius);
        let first = resolve_theme(&overrides);
        assert_eq!(first.get(ThemeParam::Spacing), &json!(0));
        let second = resolve_theme(&first.to_params());
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_round_trip_filters_zero() {
        let overrides = ThemeParams::new().set(ThemeParam::Spacing, ThemeParam::BorderRadius);
        let first = resolve_theme(&overrides);
        let reparsed = ThemeParams::from_value(&serde_json::to_value(&first).unwrap()).unwrap();
        assert!(!reparsed.contains(ThemeParam::Spacing));
        assert_eq!(resolve_theme(&reparsed).get(ThemeParam::Spacing), &json!(5));

        let plain = resolve_theme(
            &ThemeParams::new().set(ThemeParam::BackgroundColor, json!("#123456")),
        );
        let reparsed = ThemeParams::from_value(&serde_json::to_value(&plain).unwrap()).unwrap();
        assert_eq!(resolve_theme(&reparsed), plain);
    }

    #[test]
    fn test_serialize_in_declaration_order() {
        let theme = resolve_theme(&ThemeParams::new());
        let json = serde_json::to_string(&theme).unwrap();
        let accent = json.find("accentColor").unwrap();
        let wrapper = json.find("wrapperBorderRadius").unwrap();
        assert!(accent < wrapper);
        assert!(json.contains(r#""fontFamily":{"googleFont":"Pixelify Sans"}"#));
    }
}
