//! The fixed set of theme parameters the grid library recognizes.
//!
//! Every parameter has a [`ParamKind`] describing which value shapes it
//! accepts. Overrides of the wrong shape are treated as absent by the
//! resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A recognized theme parameter name.
///
/// Variants are declared in the order the grid library documents them, and
/// that order is also the iteration order of [`ThemeParam::ALL`] and of
/// resolved output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeParam {
    AccentColor,
    BackgroundColor,
    BorderColor,
    BorderRadius,
    BrowserColorScheme,
    ChromeBackgroundColor,
    FontFamily,
    FontSize,
    ForegroundColor,
    HeaderBackgroundColor,
    HeaderFontSize,
    HeaderFontWeight,
    HeaderTextColor,
    RowVerticalPaddingScale,
    Spacing,
    WrapperBorderRadius,
}

/// The value shape a parameter accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Any CSS color string (`#rrggbb`, `rgb(...)`, named colors).
    Color,
    /// A number of pixels, or a CSS length string such as `"4px"`.
    Length,
    /// A plain number (scale factors).
    Number,
    /// A family name, a `{ "googleFont": name }` descriptor, or a list of either.
    FontFamily,
    /// A numeric weight (`700`) or a keyword (`"bold"`).
    FontWeight,
    /// One of `light`, `dark`, `normal`, `inherit`.
    ColorScheme,
}

impl ThemeParam {
    /// Number of recognized parameters.
    pub const COUNT: usize = 16;

    /// Every recognized parameter, in declaration order.
    pub const ALL: [ThemeParam; Self::COUNT] = [
        ThemeParam::AccentColor,
        ThemeParam::BackgroundColor,
        ThemeParam::BorderColor,
        ThemeParam::BorderRadius,
        ThemeParam::BrowserColorScheme,
        ThemeParam::ChromeBackgroundColor,
        ThemeParam::FontFamily,
        ThemeParam::FontSize,
        ThemeParam::ForegroundColor,
        ThemeParam::HeaderBackgroundColor,
        ThemeParam::HeaderFontSize,
        ThemeParam::HeaderFontWeight,
        ThemeParam::HeaderTextColor,
        ThemeParam::RowVerticalPaddingScale,
        ThemeParam::Spacing,
        ThemeParam::WrapperBorderRadius,
    ];

    /// Position of this parameter in [`ThemeParam::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The camelCase name used by the grid library and the host.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeParam::AccentColor => "accentColor",
            ThemeParam::BackgroundColor => "backgroundColor",
            ThemeParam::BorderColor => "borderColor",
            ThemeParam::BorderRadius => "borderRadius",
            ThemeParam::BrowserColorScheme => "browserColorScheme",
            ThemeParam::ChromeBackgroundColor => "chromeBackgroundColor",
            ThemeParam::FontFamily => "fontFamily",
            ThemeParam::FontSize => "fontSize",
            ThemeParam::ForegroundColor => "foregroundColor",
            ThemeParam::HeaderBackgroundColor => "headerBackgroundColor",
            ThemeParam::HeaderFontSize => "headerFontSize",
            ThemeParam::HeaderFontWeight => "headerFontWeight",
            ThemeParam::HeaderTextColor => "headerTextColor",
            ThemeParam::RowVerticalPaddingScale => "rowVerticalPaddingScale",
            ThemeParam::Spacing => "spacing",
            ThemeParam::WrapperBorderRadius => "wrapperBorderRadius",
        }
    }

    /// Looks up a parameter by its camelCase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }

    /// The value shape this parameter accepts.
    pub fn kind(self) -> ParamKind {
        match self {
            ThemeParam::AccentColor
            | ThemeParam::BackgroundColor
            | ThemeParam::BorderColor
            | ThemeParam::ChromeBackgroundColor
            | ThemeParam::ForegroundColor
            | ThemeParam::HeaderBackgroundColor
            | ThemeParam::HeaderTextColor => ParamKind::Color,
            ThemeParam::BorderRadius
            | ThemeParam::FontSize
            | ThemeParam::HeaderFontSize
            | ThemeParam::Spacing
            | ThemeParam::WrapperBorderRadius => ParamKind::Length,
            ThemeParam::RowVerticalPaddingScale => ParamKind::Number,
            ThemeParam::FontFamily => ParamKind::FontFamily,
            ThemeParam::HeaderFontWeight => ParamKind::FontWeight,
            ThemeParam::BrowserColorScheme => ParamKind::ColorScheme,
        }
    }
}

impl fmt::Display for ThemeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown theme parameter '{}'", s))
    }
}
