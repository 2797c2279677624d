//! Config Resolver: raw stored document → fully-defaulted [`SiteConfig`].
//!
//! This is the availability boundary of the engine. Whatever shape the
//! stored blob is in — absent, `null`, an older schema, or plain garbage —
//! resolution terminates with a complete document. Whole-document parse
//! failures degrade to the full default set; per-field absence degrades
//! field-wise. The resolver reads the raw input exactly once and never
//! consults partially-resolved state.

use metrics::counter;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::sections::{
    RawBioSection, RawGallerySection, RawHeroSection, RawNewsSection, RawProjectsSection,
    RawVideoSection, RawWhatsappSection, resolve_bio, resolve_gallery, resolve_hero, resolve_news,
    resolve_projects, resolve_video, resolve_whatsapp,
};
use crate::domain::site::{SiteConfig, SiteDefaults, SiteMeta, SiteSections};
use crate::domain::theme::{RawThemeTokens, resolve_theme, token_or};

pub const CONFIG_FALLBACK_COUNTER: &str = "mandato_config_fallback_total";

/// Stored document shape. Every key is optional and unknown keys are
/// ignored, so documents written by newer authoring tools still resolve.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    pub meta: Option<RawSiteMeta>,
    pub theme: Option<RawThemeTokens>,
    pub sections: Option<RawSiteSections>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteSections {
    pub hero: Option<RawHeroSection>,
    pub bio: Option<RawBioSection>,
    pub projects: Option<RawProjectsSection>,
    pub video: Option<RawVideoSection>,
    pub gallery: Option<RawGallerySection>,
    pub news: Option<RawNewsSection>,
    pub whatsapp: Option<RawWhatsappSection>,
}

/// Resolve a raw stored document against the provided default set.
///
/// Never fails: a `None`/`null` input or an unparseable document yields the
/// full default configuration.
pub fn resolve_site_config(raw: Option<&Value>, defaults: &SiteDefaults) -> SiteConfig {
    let raw = match raw {
        None | Some(Value::Null) => return defaults.config.clone(),
        Some(value) => match RawSiteConfig::deserialize(value) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(
                    target = "mandato::resolver",
                    error = %err,
                    defaults_version = defaults.version,
                    "stored site config is malformed, falling back to defaults"
                );
                counter!(CONFIG_FALLBACK_COUNTER).increment(1);
                return defaults.config.clone();
            }
        },
    };

    let d = &defaults.config;
    let meta = resolve_meta(raw.meta, &d.meta);
    let theme = resolve_theme(raw.theme, &d.theme);
    let sections = raw.sections.unwrap_or_default();

    SiteConfig {
        meta,
        theme,
        sections: SiteSections {
            hero: resolve_hero(sections.hero, &d.sections.hero),
            bio: resolve_bio(sections.bio, &d.sections.bio),
            projects: resolve_projects(sections.projects, &d.sections.projects),
            video: resolve_video(sections.video, &d.sections.video),
            gallery: resolve_gallery(sections.gallery, &d.sections.gallery),
            news: resolve_news(sections.news, &d.sections.news),
            whatsapp: resolve_whatsapp(sections.whatsapp, &d.sections.whatsapp),
        },
    }
}

fn resolve_meta(raw: Option<RawSiteMeta>, default: &SiteMeta) -> SiteMeta {
    let raw = raw.unwrap_or_default();
    SiteMeta {
        title: token_or(raw.title, &default.title),
        description: token_or(raw.description, &default.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> SiteDefaults {
        SiteDefaults::for_tenant("Ana Souza")
    }

    #[test]
    fn null_raw_yields_full_defaults_with_tenant_name() {
        let resolved = resolve_site_config(None, &defaults());
        assert_eq!(resolved.sections.hero.title, "Vereador Ana Souza");
        assert!(resolved.sections.bio.enabled);
        assert!(!resolved.sections.video.enabled);

        let explicit_null = Value::Null;
        assert_eq!(
            resolve_site_config(Some(&explicit_null), &defaults()),
            resolved
        );
    }

    #[test]
    fn empty_object_yields_full_defaults() {
        let raw = json!({});
        let resolved = resolve_site_config(Some(&raw), &defaults());
        assert_eq!(resolved, defaults().config);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = json!({
            "meta": { "title": "Gabinete 45", "futureFlag": true },
            "newTopLevelFeature": { "anything": [1, 2, 3] },
            "sections": {
                "hero": { "title": "Olá", "experimentalLayout": "wide" },
                "timeline": { "enabled": true }
            }
        });

        let resolved = resolve_site_config(Some(&raw), &defaults());
        assert_eq!(resolved.meta.title, "Gabinete 45");
        assert_eq!(resolved.sections.hero.title, "Olá");
    }

    #[test]
    fn malformed_document_degrades_to_defaults() {
        for raw in [json!([1, 2, 3]), json!("just a string"), json!(42)] {
            let resolved = resolve_site_config(Some(&raw), &defaults());
            assert_eq!(resolved, defaults().config);
        }
    }

    #[test]
    fn meta_falls_back_field_wise() {
        let raw = json!({ "meta": { "description": "Mandato popular" } });
        let resolved = resolve_site_config(Some(&raw), &defaults());
        assert_eq!(resolved.meta.title, "Vereador Ana Souza");
        assert_eq!(resolved.meta.description, "Mandato popular");
    }

    #[test]
    fn theme_partial_override_keeps_remaining_defaults() {
        let raw = json!({ "theme": { "primary": "#111111" } });
        let resolved = resolve_site_config(Some(&raw), &defaults());
        assert_eq!(resolved.theme.primary, "#111111");

        let d = defaults().config.theme;
        assert_eq!(resolved.theme.secondary, d.secondary);
        assert_eq!(resolved.theme.background, d.background);
        assert_eq!(resolved.theme.text, d.text);
        assert_eq!(resolved.theme.font, d.font);
    }

    #[test]
    fn resolution_is_idempotent() {
        let raw = json!({
            "meta": { "title": "Gabinete da Ana" },
            "theme": { "primary": "#0a0a0a" },
            "sections": {
                "hero": { "subtitle": "Mandato 2025–2028", "badgeNumber": "45" },
                "gallery": { "enabled": true, "images": ["https://cdn.example/a.jpg"] },
                "news": {
                    "enabled": true,
                    "posts": [{ "date": "2026-08-01", "title": "Sessão", "snippet": "Resumo" }]
                },
                "whatsapp": { "link": "https://wa.me/5511999990000" }
            }
        });

        let first = resolve_site_config(Some(&raw), &defaults());
        let serialized = serde_json::to_value(&first).expect("serialize resolved config");
        let second = resolve_site_config(Some(&serialized), &defaults());
        assert_eq!(first, second);
    }

    #[test]
    fn fully_defaulted_document_resolves_to_itself() {
        let first = resolve_site_config(None, &defaults());
        let serialized = serde_json::to_value(&first).expect("serialize resolved config");
        let second = resolve_site_config(Some(&serialized), &defaults());
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_typed_section_fragment_degrades_to_defaults() {
        // A wrong-typed subtree fails the single-pass parse; the whole
        // document is treated as absent rather than partially applied.
        let raw = json!({ "sections": { "hero": "not an object" } });
        let resolved = resolve_site_config(Some(&raw), &defaults());
        assert_eq!(resolved, defaults().config);
    }

    #[test]
    fn alternate_default_sets_flow_through() {
        let mut alternate = defaults();
        alternate.config.theme.primary = "#ff0000".to_string();
        alternate.config.sections.hero.subtitle = "Campanha".to_string();

        let resolved = resolve_site_config(None, &alternate);
        assert_eq!(resolved.theme.primary, "#ff0000");
        assert_eq!(resolved.sections.hero.subtitle, "Campanha");
    }
}
