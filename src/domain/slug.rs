//! Public site slugs.
//!
//! A [`Slug`] is the URL-safe identifier that resolves to exactly one tenant
//! site. Validation is deliberately strict (lowercase ASCII, digits and
//! hyphens) so slugs survive being embedded in paths, links, and filenames
//! without escaping. [`derive_slug`] bridges free-form office names to slug
//! candidates via the `slug` crate.

use slug::slugify;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("slug `{value}` contains characters outside [a-z0-9-]")]
    InvalidCharacter { value: String },
    #[error("failed to derive a slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Validated, URL-safe site identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(SlugError::Empty);
        }
        if !raw
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        {
            return Err(SlugError::InvalidCharacter { value: raw });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a slug candidate from a human-readable name.
pub fn derive_slug(input: &str) -> Result<Slug, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::Empty);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Slug::new(candidate)
}

/// Best-effort display name for a tenant whose stored record carries no
/// usable name. `ana-souza` becomes `Ana Souza`.
pub fn humanize_slug(slug: &Slug) -> String {
    slug.as_str()
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
