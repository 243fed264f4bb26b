//! The resolver's documented contract, checked against the built-in defaults.

use gridbind_theme::{
    resolve_theme, ParamValue, ThemeDefaults, ThemeParam, ThemeParams, ThemeResolver,
};
use serde_json::json;

fn default_literal(param: ThemeParam) -> serde_json::Value {
    match ThemeDefaults::builtin().get(param) {
        ParamValue::Literal(value) => value.clone(),
        ParamValue::Ref(target) => panic!("{} defaults to a reference to {}", param, target),
    }
}

// ============================================================================
// Totality and fallback
// ============================================================================

#[test]
fn empty_overrides_resolve_every_parameter() {
    let theme = resolve_theme(&ThemeParams::new());
    assert_eq!(theme.len(), ThemeParam::COUNT);
    for (param, value) in theme.iter() {
        assert!(!value.is_null(), "{} resolved to null", param);
    }
}

#[test]
fn plain_parameters_fall_back_to_defaults() {
    let theme = resolve_theme(&ThemeParams::new());
    for param in ThemeParam::ALL {
        if param == ThemeParam::ChromeBackgroundColor {
            continue;
        }
        assert_eq!(theme.get(param), &default_literal(param), "{}", param);
    }
}

#[test]
fn documented_default_values() {
    let theme = resolve_theme(&ThemeParams::new());
    let value = serde_json::to_value(&theme).unwrap();
    assert_eq!(
        value,
        json!({
            "accentColor": "#0086F4",
            "backgroundColor": "#F1EDE1",
            "borderColor": "#98968F",
            "borderRadius": 0,
            "browserColorScheme": "light",
            "chromeBackgroundColor": "#F1EDE1",
            "fontFamily": { "googleFont": "Pixelify Sans" },
            "fontSize": 15,
            "foregroundColor": "#605E57",
            "headerBackgroundColor": "#E4DAD1",
            "headerFontSize": 15,
            "headerFontWeight": 700,
            "headerTextColor": "#3C3A35",
            "rowVerticalPaddingScale": 1.2,
            "spacing": 5,
            "wrapperBorderRadius": 0
        })
    );
}

// ============================================================================
// Reference tracking
// ============================================================================

#[test]
fn chrome_background_tracks_resolved_background() {
    let overrides = ThemeParams::from_json(r##"{ "backgroundColor": "#123456" }"##).unwrap();
    let theme = resolve_theme(&overrides);
    assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#123456"));
}

#[test]
fn chrome_background_defaults_to_default_background() {
    let theme = resolve_theme(&ThemeParams::new());
    assert_eq!(
        theme.get(ThemeParam::ChromeBackgroundColor),
        &default_literal(ThemeParam::BackgroundColor)
    );
    assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#F1EDE1"));
}

#[test]
fn reference_overrides_from_host_json() {
    let overrides = ThemeParams::from_json(
        r##"{
            "foregroundColor": "#222222",
            "headerTextColor": { "ref": "foregroundColor" }
        }"##,
    )
    .unwrap();
    let theme = resolve_theme(&overrides);
    assert_eq!(theme.get(ThemeParam::HeaderTextColor), &json!("#222222"));
}

// ============================================================================
// Empty and malformed overrides
// ============================================================================

#[test]
fn empty_string_is_treated_as_absent() {
    let overrides = ThemeParams::from_json(r#"{ "accentColor": "" }"#).unwrap();
    let theme = resolve_theme(&overrides);
    assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#0086F4"));
}

#[test]
fn falsy_values_are_treated_as_absent() {
    let overrides = ThemeParams::from_json(
        r#"{ "fontSize": 0, "spacing": null, "headerTextColor": false, "fontFamily": {} }"#,
    )
    .unwrap();
    let theme = resolve_theme(&overrides);
    assert_eq!(theme.get(ThemeParam::FontSize), &json!(15));
    assert_eq!(theme.get(ThemeParam::Spacing), &json!(5));
    assert_eq!(theme.get(ThemeParam::HeaderTextColor), &json!("#3C3A35"));
    assert_eq!(
        theme.get(ThemeParam::FontFamily),
        &json!({ "googleFont": "Pixelify Sans" })
    );
}

#[test]
fn malformed_values_degrade_to_defaults() {
    let overrides = ThemeParams::from_json(
        r##"{
            "accentColor": 42,
            "browserColorScheme": "purple",
            "rowVerticalPaddingScale": "tall",
            "chromeBackgroundColor": { "ref": "fontSize" },
            "borderColor": "#000000"
        }"##,
    )
    .unwrap();
    let theme = resolve_theme(&overrides);
    assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#0086F4"));
    assert_eq!(theme.get(ThemeParam::BrowserColorScheme), &json!("light"));
    assert_eq!(theme.get(ThemeParam::RowVerticalPaddingScale), &json!(1.2));
    assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#F1EDE1"));
    assert_eq!(theme.get(ThemeParam::BorderColor), &json!("#000000"));
}

#[test]
fn unrecognized_keys_are_ignored() {
    let overrides =
        ThemeParams::from_json(r##"{ "oddRowBackgroundColor": "#EEEEEE" }"##).unwrap();
    assert!(overrides.is_empty());
    assert_eq!(resolve_theme(&overrides), resolve_theme(&ThemeParams::new()));
}

// ============================================================================
// Idempotence and determinism
// ============================================================================

#[test]
fn resolving_resolved_output_is_a_fixed_point() {
    let overrides = ThemeParams::from_json(
        r##"{
            "backgroundColor": "#101010",
            "fontFamily": [{ "googleFont": "Inter" }, "sans-serif"],
            "headerFontWeight": "bold",
            "spacing": 7
        }"##,
    )
    .unwrap();
    let once = resolve_theme(&overrides);

    let reparsed = ThemeParams::from_value(&serde_json::to_value(&once).unwrap()).unwrap();
    let twice = resolve_theme(&reparsed);
    assert_eq!(once, twice);
}

#[test]
fn resolution_is_deterministic() {
    let overrides = ThemeParams::from_json(r##"{ "accentColor": "#ABCDEF" }"##).unwrap();
    assert_eq!(resolve_theme(&overrides), resolve_theme(&overrides));
}

#[test]
fn resolved_theme_does_not_alias_overrides() {
    let mut overrides = ThemeParams::new().set(ThemeParam::AccentColor, json!("#ABCDEF"));
    let theme = resolve_theme(&overrides);
    overrides.remove(ThemeParam::AccentColor);
    assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#ABCDEF"));
}

// ============================================================================
// Custom defaults
// ============================================================================

#[test]
fn custom_defaults_keep_reference_semantics() {
    let defaults = ThemeDefaults::builtin()
        .with(vec![(ThemeParam::BackgroundColor, json!("#FFFFFF").into())])
        .unwrap();
    let resolver = ThemeResolver::new(&defaults);

    let theme = resolver.resolve(&ThemeParams::new());
    assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#FFFFFF"));

    let overrides = ThemeParams::new().set(ThemeParam::BackgroundColor, json!("#000000"));
    let theme = resolver.resolve(&overrides);
    assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#000000"));
}
