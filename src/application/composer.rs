//! Page Composer: resolved [`SiteConfig`] → ordered render plan.
//!
//! Render order is a product decision compiled into the composer, never
//! derived from the stored document: hero, status, video, gallery, news,
//! bio, projects, whatsapp, footer. Status and footer are chrome blocks and
//! always present; every other entry appears iff its section is renderable.

use tracing::debug;

use crate::domain::sections::{
    BioSection, GallerySection, HeroSection, NewsSection, ProjectsSection, VideoSection,
    WhatsappSection,
};
use crate::domain::site::SiteConfig;

/// One block the presentation layer must render, carrying the resolved
/// section content it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    Hero(HeroSection),
    Status,
    Video(VideoSection),
    Gallery(GallerySection),
    News(NewsSection),
    Bio(BioSection),
    Projects(ProjectsSection),
    Whatsapp(WhatsappSection),
    Footer,
}

impl RenderInstruction {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderInstruction::Hero(_) => "hero",
            RenderInstruction::Status => "status",
            RenderInstruction::Video(_) => "video",
            RenderInstruction::Gallery(_) => "gallery",
            RenderInstruction::News(_) => "news",
            RenderInstruction::Bio(_) => "bio",
            RenderInstruction::Projects(_) => "projects",
            RenderInstruction::Whatsapp(_) => "whatsapp",
            RenderInstruction::Footer => "footer",
        }
    }
}

/// Ordered sequence of render instructions for one resolved site.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    instructions: Vec<RenderInstruction>,
}

impl RenderPlan {
    pub fn instructions(&self) -> &[RenderInstruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<RenderInstruction> {
        self.instructions
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.instructions.iter().map(|i| i.kind()).collect()
    }
}

/// Compose the render plan for a resolved configuration. Pure; omission of
/// an incomplete section is the only form of degradation here.
pub fn compose(config: &SiteConfig) -> RenderPlan {
    let sections = &config.sections;
    let mut instructions = Vec::with_capacity(9);

    if sections.hero.renderable() {
        instructions.push(RenderInstruction::Hero(sections.hero.clone()));
    } else {
        skipped("hero");
    }

    instructions.push(RenderInstruction::Status);

    if sections.video.renderable() {
        instructions.push(RenderInstruction::Video(sections.video.clone()));
    } else {
        skipped("video");
    }

    if sections.gallery.renderable() {
        instructions.push(RenderInstruction::Gallery(sections.gallery.clone()));
    } else {
        skipped("gallery");
    }

    if sections.news.renderable() {
        instructions.push(RenderInstruction::News(sections.news.clone()));
    } else {
        skipped("news");
    }

    if sections.bio.renderable() {
        instructions.push(RenderInstruction::Bio(sections.bio.clone()));
    } else {
        skipped("bio");
    }

    if sections.projects.renderable() {
        instructions.push(RenderInstruction::Projects(sections.projects.clone()));
    } else {
        skipped("projects");
    }

    if sections.whatsapp.renderable() {
        instructions.push(RenderInstruction::Whatsapp(sections.whatsapp.clone()));
    } else {
        skipped("whatsapp");
    }

    instructions.push(RenderInstruction::Footer);

    RenderPlan { instructions }
}

fn skipped(kind: &'static str) {
    debug!(target = "mandato::composer", kind, "section not renderable, omitted from plan");
}
