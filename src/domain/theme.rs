//! Theme token resolution.
//!
//! The theme resolver guarantees completeness, not correctness: every token
//! is a non-empty string after resolution, but color syntax is a
//! rendering-layer concern and is not validated here.

use serde::{Deserialize, Serialize};

/// Complete set of style tokens a site renders with. Never partially
/// populated once resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub font: String,
}

/// Tenant-supplied theme fragment as stored. Any subset of fields may be
/// present; extra keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawThemeTokens {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub font: Option<String>,
}

/// Resolve a tenant theme fragment against the default token set.
///
/// A tenant value wins when present and non-empty after trimming; anything
/// else falls back to the corresponding default.
pub fn resolve_theme(raw: Option<RawThemeTokens>, defaults: &ThemeTokens) -> ThemeTokens {
    let raw = raw.unwrap_or_default();
    ThemeTokens {
        primary: token_or(raw.primary, &defaults.primary),
        secondary: token_or(raw.secondary, &defaults.secondary),
        background: token_or(raw.background, &defaults.background),
        text: token_or(raw.text, &defaults.text),
        font: token_or(raw.font, &defaults.font),
    }
}

pub(crate) fn token_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback.to_string(),
    }
}
