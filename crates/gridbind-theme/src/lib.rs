//! # gridbind-theme - Theme Parameter Resolution
//!
//! The data-grid library is themed through a flat set of named parameters
//! (`accentColor`, `fontSize`, `headerFontWeight`, ...). The builder lets
//! users override any subset of them; this crate merges those overrides
//! onto the library defaults and produces one complete parameter set.
//!
//! ## Core Concepts
//!
//! - [`ThemeParam`]: the sixteen recognized parameter names
//! - [`ParamValue`]: a literal or a reference (`{ "ref": "backgroundColor" }`)
//! - [`ThemeParams`]: a partial override set, filtered on construction
//! - [`ThemeDefaults`]: a complete, acyclic default table
//! - [`ResolvedTheme`]: one literal per parameter, ready for the grid
//! - [`resolve_theme`]: the total resolution entry point
//!
//! ## Quick Start
//!
//! ```rust
//! use gridbind_theme::{resolve_theme, ThemeParam, ThemeParams};
//! use serde_json::json;
//!
//! let overrides = ThemeParams::from_json(r##"{
//!     "backgroundColor": "#123456",
//!     "accentColor": ""
//! }"##).unwrap();
//!
//! let theme = resolve_theme(&overrides);
//!
//! // Overrides win.
//! assert_eq!(theme.get(ThemeParam::BackgroundColor), &json!("#123456"));
//! // Empty strings count as absent.
//! assert_eq!(theme.get(ThemeParam::AccentColor), &json!("#0086F4"));
//! // The chrome follows whatever background was resolved.
//! assert_eq!(theme.get(ThemeParam::ChromeBackgroundColor), &json!("#123456"));
//! ```
//!
//! ## Precedence
//!
//! ```text
//! resolved[key] = override[key]   if present, non-empty and well-shaped
//!               | default[key]    otherwise
//! ```
//!
//! References are followed after the layering step, so they observe
//! overrides on their targets.
//!
//! ## Base Themes
//!
//! [`GridTheme`] combines a [`BaseTheme`] and an [`IconSet`] with resolved
//! parameters; [`ThemeSelection`] lets a host-supplied custom theme object
//! take precedence over parameters altogether.

mod defaults;
mod error;
mod param;
mod params;
mod part;
mod resolve;
mod value;

pub use defaults::ThemeDefaults;
pub use error::{Result, ThemeError};
pub use param::{ParamKind, ThemeParam};
pub use params::ThemeParams;
pub use part::{BaseTheme, GridTheme, IconSet, ThemeSelection};
pub use resolve::{resolve_theme, ResolvedTheme, ThemeResolver};
pub use value::{is_empty_value, matches_kind, ParamValue, REF_KEY};
