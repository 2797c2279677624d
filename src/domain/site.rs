//! Tenant site root document and the compiled-in default set.

use serde::{Deserialize, Serialize};

use crate::domain::sections::{
    BioSection, GallerySection, HeroSection, NewsSection, ProjectsSection, SectionStyle,
    VideoSection, WhatsappSection,
};
use crate::domain::slug::Slug;
use crate::domain::theme::ThemeTokens;

/// Bump when the default set changes shape or copy in a way that matters to
/// stored-config migrations or cached render output.
pub const DEFAULTS_VERSION: u16 = 3;

/// A tenant's site identity as handed over by the lookup collaborator.
/// Read-only input to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantSite {
    pub slug: Slug,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

/// Every catalog kind is a named field, so "all seven sections present after
/// resolution" holds by construction rather than by map discipline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteSections {
    pub hero: HeroSection,
    pub bio: BioSection,
    pub projects: ProjectsSection,
    pub video: VideoSection,
    pub gallery: GallerySection,
    pub news: NewsSection,
    pub whatsapp: WhatsappSection,
}

/// Fully-resolved site document. Immutable once produced; constructed fresh
/// on every resolution request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub meta: SiteMeta,
    pub theme: ThemeTokens,
    pub sections: SiteSections,
}

/// Versioned default document the resolver merges tenant fragments onto.
///
/// Passed into the resolver as a value so tests (and future products) can
/// substitute alternate default sets without touching resolver logic.
#[derive(Clone, Debug)]
pub struct SiteDefaults {
    pub version: u16,
    pub config: SiteConfig,
}

impl SiteDefaults {
    /// The standard default set, seeded with the tenant's display name.
    pub fn for_tenant(name: &str) -> Self {
        let name = name.trim();
        Self {
            version: DEFAULTS_VERSION,
            config: SiteConfig {
                meta: SiteMeta {
                    title: format!("Vereador {name}"),
                    description: format!(
                        "Site oficial do mandato de {name}: biografia, projetos e contato."
                    ),
                },
                theme: default_theme(),
                sections: SiteSections {
                    hero: HeroSection {
                        enabled: true,
                        style: SectionStyle::default(),
                        title: format!("Vereador {name}"),
                        subtitle: "Trabalhando por você".to_string(),
                        badge_number: None,
                        background_image: None,
                    },
                    bio: BioSection {
                        enabled: true,
                        style: SectionStyle::default(),
                        heading: "Biografia".to_string(),
                        body: format!("Conheça a trajetória e o trabalho de {name}."),
                    },
                    projects: ProjectsSection {
                        enabled: true,
                        style: SectionStyle::default(),
                        heading: "Projetos e Ações".to_string(),
                        items: Vec::new(),
                    },
                    video: VideoSection {
                        enabled: false,
                        style: SectionStyle::default(),
                        title: "Vídeo".to_string(),
                        url: String::new(),
                    },
                    gallery: GallerySection {
                        enabled: false,
                        style: SectionStyle::default(),
                        title: "Galeria".to_string(),
                        images: Vec::new(),
                    },
                    news: NewsSection {
                        enabled: false,
                        style: SectionStyle::default(),
                        title: "Notícias".to_string(),
                        posts: Vec::new(),
                    },
                    whatsapp: WhatsappSection {
                        enabled: true,
                        style: SectionStyle::default(),
                        link: String::new(),
                        title: "Fale com o gabinete".to_string(),
                        description: "Envie sua mensagem diretamente pelo WhatsApp.".to_string(),
                        floating_button: false,
                    },
                },
            },
        }
    }
}

fn default_theme() -> ThemeTokens {
    ThemeTokens {
        primary: "#1e3a8a".to_string(),
        secondary: "#f59e0b".to_string(),
        background: "#f8fafc".to_string(),
        text: "#111827".to_string(),
        font: "Inter".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_defaults_seed_tenant_name_into_copy() {
        let defaults = SiteDefaults::for_tenant("Ana Souza");
        assert_eq!(defaults.config.sections.hero.title, "Vereador Ana Souza");
        assert!(defaults.config.meta.description.contains("Ana Souza"));
        assert_eq!(defaults.version, DEFAULTS_VERSION);
    }

    #[test]
    fn standard_defaults_enable_core_sections_only() {
        let sections = SiteDefaults::for_tenant("Ana Souza").config.sections;
        assert!(sections.hero.enabled);
        assert!(sections.bio.enabled);
        assert!(sections.projects.enabled);
        assert!(sections.whatsapp.enabled);
        assert!(!sections.video.enabled);
        assert!(!sections.gallery.enabled);
        assert!(!sections.news.enabled);
    }

    #[test]
    fn standard_defaults_have_complete_theme() {
        let theme = SiteDefaults::for_tenant("Ana Souza").config.theme;
        for token in [
            &theme.primary,
            &theme.secondary,
            &theme.background,
            &theme.text,
            &theme.font,
        ] {
            assert!(!token.trim().is_empty());
        }
    }
}
