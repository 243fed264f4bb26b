//! Scalar settings with manifest defaults.
//!
//! Host values follow falsy semantics: `None`, blank strings and `0` fall
//! back to the property's manifest default.

use gridbind_schema::manifest;

/// The manifest default for a text property.
pub(crate) fn default_text(name: &str) -> Option<&'static str> {
    manifest()
        .property(name)
        .and_then(|p| p.default_value.as_str())
}

pub(crate) fn text(name: &str, value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| default_text(name))
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn flag(name: &str, value: Option<bool>) -> bool {
    value
        .or_else(|| manifest().property(name).and_then(|p| p.default_value.as_bool()))
        .unwrap_or(false)
}

/// A whole number clamped into the property's range.
pub(crate) fn number(name: &str, value: Option<f64>) -> u32 {
    let def = manifest().property(name);
    let raw = value
        .filter(|v| v.is_finite() && *v != 0.0)
        .or_else(|| def.and_then(|p| p.default_value.as_f64()))
        .unwrap_or_default();
    let clamped = def.and_then(|p| p.clamp(raw)).unwrap_or(raw);
    clamped.max(0.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fallback() {
        assert_eq!(text("loadingMessage", None), "Updating...");
        assert_eq!(text("loadingMessage", Some("  ")), "Updating...");
        assert_eq!(text("loadingMessage", Some("Saving")), "Saving");
        assert_eq!(text("selectedRowBackgroundColor", None), "");
    }

    #[test]
    fn test_flag_fallback() {
        assert!(flag("enableSorting", None));
        assert!(!flag("enableSorting", Some(false)));
        assert!(!flag("autoSizeColumns", None));
    }

    #[test]
    fn test_number_fallback_and_clamp() {
        assert_eq!(number("rowHeight", None), 25);
        assert_eq!(number("rowHeight", Some(0.0)), 25);
        assert_eq!(number("rowHeight", Some(5.0)), 10);
        assert_eq!(number("rowHeight", Some(250.0)), 200);
        assert_eq!(number("pageSize", Some(f64::NAN)), 25);
        assert_eq!(number("headerHeight", Some(60.4)), 60);
    }
}
