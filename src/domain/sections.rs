//! Section catalog, per-kind configuration, and defaulting.
//!
//! The catalog of section kinds is fixed and versioned with the binary;
//! tenants toggle and fill sections but never define new kinds. Defaulting
//! is one level of field-wise override: a field present and non-empty in the
//! tenant fragment wins, anything absent falls back to the kind default.
//! Arrays (gallery images, news posts, project items) are replaced wholesale
//! when the tenant supplies them — a tenant replacing their gallery must not
//! retain stale placeholder entries.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::theme::token_or;

/// The seven tenant-configurable section kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Bio,
    Projects,
    Video,
    Gallery,
    News,
    Whatsapp,
}

impl SectionKind {
    /// Catalog order as stored, not render order; the composer owns the
    /// render order including the non-configurable status and footer blocks.
    pub const CATALOG: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::Bio,
        SectionKind::Projects,
        SectionKind::Video,
        SectionKind::Gallery,
        SectionKind::News,
        SectionKind::Whatsapp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Bio => "bio",
            SectionKind::Projects => "projects",
            SectionKind::Video => "video",
            SectionKind::Gallery => "gallery",
            SectionKind::News => "news",
            SectionKind::Whatsapp => "whatsapp",
        }
    }

    /// Core kinds render out of the box; rich media kinds are opt-in.
    pub fn enabled_by_default(self) -> bool {
        match self {
            SectionKind::Hero
            | SectionKind::Bio
            | SectionKind::Projects
            | SectionKind::Whatsapp => true,
            SectionKind::Video | SectionKind::Gallery | SectionKind::News => false,
        }
    }
}

/// Per-section style overrides shared by every kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSectionStyle {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub badge_number: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHeroSection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub badge_number: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BioSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub heading: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBioSection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub heading: Option<String>,
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProjectItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub heading: String,
    pub items: Vec<ProjectItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProjectsSection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub heading: Option<String>,
    pub items: Option<Vec<RawProjectItem>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawVideoSection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub title: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawGallerySection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub title: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub date: String,
    pub title: String,
    pub snippet: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNewsPost {
    pub date: Option<String>,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub title: String,
    pub posts: Vec<NewsPost>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNewsSection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub title: Option<String>,
    pub posts: Option<Vec<RawNewsPost>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsappSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: SectionStyle,
    pub link: String,
    pub title: String,
    pub description: String,
    pub floating_button: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawWhatsappSection {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: RawSectionStyle,
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub floating_button: Option<bool>,
}

pub fn resolve_hero(raw: Option<RawHeroSection>, default: &HeroSection) -> HeroSection {
    let raw = raw.unwrap_or_default();
    HeroSection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        title: token_or(raw.title, &default.title),
        subtitle: token_or(raw.subtitle, &default.subtitle),
        badge_number: opt_text_or(raw.badge_number, &default.badge_number),
        background_image: opt_text_or(raw.background_image, &default.background_image),
    }
}

pub fn resolve_bio(raw: Option<RawBioSection>, default: &BioSection) -> BioSection {
    let raw = raw.unwrap_or_default();
    BioSection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        heading: token_or(raw.heading, &default.heading),
        body: token_or(raw.body, &default.body),
    }
}

pub fn resolve_projects(
    raw: Option<RawProjectsSection>,
    default: &ProjectsSection,
) -> ProjectsSection {
    let raw = raw.unwrap_or_default();
    let items = match raw.items {
        Some(items) => items
            .into_iter()
            .map(|item| ProjectItem {
                title: item.title.unwrap_or_default().trim().to_string(),
                description: item.description.unwrap_or_default().trim().to_string(),
            })
            .filter(|item| !item.title.is_empty() || !item.description.is_empty())
            .collect(),
        None => default.items.clone(),
    };

    ProjectsSection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        heading: token_or(raw.heading, &default.heading),
        items,
    }
}

pub fn resolve_video(raw: Option<RawVideoSection>, default: &VideoSection) -> VideoSection {
    let raw = raw.unwrap_or_default();
    VideoSection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        title: token_or(raw.title, &default.title),
        url: link_or(raw.url, &default.url),
    }
}

pub fn resolve_gallery(raw: Option<RawGallerySection>, default: &GallerySection) -> GallerySection {
    let raw = raw.unwrap_or_default();
    let images = match raw.images {
        Some(images) => images
            .into_iter()
            .map(|image| image.trim().to_string())
            .filter(|image| !image.is_empty())
            .collect(),
        None => default.images.clone(),
    };

    GallerySection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        title: token_or(raw.title, &default.title),
        images,
    }
}

pub fn resolve_news(raw: Option<RawNewsSection>, default: &NewsSection) -> NewsSection {
    let raw = raw.unwrap_or_default();
    let posts = match raw.posts {
        Some(posts) => posts
            .into_iter()
            .map(|post| NewsPost {
                date: post.date.unwrap_or_default().trim().to_string(),
                title: post.title.unwrap_or_default().trim().to_string(),
                snippet: post.snippet.unwrap_or_default().trim().to_string(),
            })
            .filter(|post| !post.title.is_empty() || !post.snippet.is_empty())
            .collect(),
        None => default.posts.clone(),
    };

    NewsSection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        title: token_or(raw.title, &default.title),
        posts,
    }
}

pub fn resolve_whatsapp(
    raw: Option<RawWhatsappSection>,
    default: &WhatsappSection,
) -> WhatsappSection {
    let raw = raw.unwrap_or_default();
    WhatsappSection {
        enabled: raw.enabled.unwrap_or(default.enabled),
        style: resolve_style(raw.style, &default.style),
        link: link_or(raw.link, &default.link),
        title: token_or(raw.title, &default.title),
        description: token_or(raw.description, &default.description),
        floating_button: raw.floating_button.unwrap_or(default.floating_button),
    }
}

fn resolve_style(raw: RawSectionStyle, default: &SectionStyle) -> SectionStyle {
    SectionStyle {
        bg_color: opt_text_or(raw.bg_color, &default.bg_color),
        text_color: opt_text_or(raw.text_color, &default.text_color),
    }
}

fn opt_text_or(value: Option<String>, fallback: &Option<String>) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => fallback.clone(),
    }
}

/// Tenant links and embed URLs must parse as absolute URLs to be carried
/// into the resolved document; anything else degrades to the default.
fn link_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if Url::parse(value.trim()).is_ok() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}

impl HeroSection {
    pub fn renderable(&self) -> bool {
        self.enabled
    }
}

impl BioSection {
    pub fn renderable(&self) -> bool {
        self.enabled
    }
}

impl ProjectsSection {
    pub fn renderable(&self) -> bool {
        self.enabled
    }
}

impl VideoSection {
    /// Rich kind: an enabled video block with no embed URL is omitted.
    pub fn renderable(&self) -> bool {
        self.enabled && !self.url.trim().is_empty()
    }
}

impl GallerySection {
    /// Rich kind: enabled but empty degrades to "not rendered".
    pub fn renderable(&self) -> bool {
        self.enabled && !self.images.is_empty()
    }
}

impl NewsSection {
    /// Rich kind: enabled but empty degrades to "not rendered".
    pub fn renderable(&self) -> bool {
        self.enabled && !self.posts.is_empty()
    }
}

impl WhatsappSection {
    /// The contact call-to-action renders even without a link target; the
    /// link is optional by product decision.
    pub fn renderable(&self) -> bool {
        self.enabled
    }
}
