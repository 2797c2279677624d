use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::application::composer::RenderInstruction;
use crate::application::error::{ErrorReport, HttpError};
use crate::application::repos::LookupError;
use crate::application::site::ResolvedSite;
use crate::domain::sections::SectionStyle;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response() -> Response {
    let view = ErrorPageView::not_found();
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Site not found",
    )
    .attach(&mut response);
    response
}

pub fn render_lookup_failed_response(err: &LookupError) -> Response {
    let view = ErrorPageView::lookup_failed();
    let mut response =
        render_template_response(ErrorTemplate { view }, StatusCode::SERVICE_UNAVAILABLE);
    ErrorReport::from_error(
        "presentation::views::render_lookup_failed_response",
        StatusCode::SERVICE_UNAVAILABLE,
        err,
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct MetaView {
    pub title: String,
    pub description: String,
}

#[derive(Clone)]
pub struct ThemeView {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub font: String,
}

#[derive(Clone)]
pub struct HeroView {
    pub style: String,
    pub title: String,
    pub subtitle: String,
    pub badge_number: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Clone)]
pub struct StatusItemView {
    pub label: String,
    pub value: String,
}

#[derive(Clone)]
pub struct VideoView {
    pub style: String,
    pub title: String,
    pub url: String,
}

#[derive(Clone)]
pub struct GalleryView {
    pub style: String,
    pub title: String,
    pub images: Vec<String>,
}

#[derive(Clone)]
pub struct NewsPostView {
    pub date: String,
    pub title: String,
    pub snippet: String,
}

#[derive(Clone)]
pub struct NewsView {
    pub style: String,
    pub title: String,
    pub posts: Vec<NewsPostView>,
}

#[derive(Clone)]
pub struct BioView {
    pub style: String,
    pub heading: String,
    pub body: String,
}

#[derive(Clone)]
pub struct ProjectItemView {
    pub title: String,
    pub description: String,
}

#[derive(Clone)]
pub struct ProjectsView {
    pub style: String,
    pub heading: String,
    pub items: Vec<ProjectItemView>,
}

#[derive(Clone)]
pub struct WhatsappView {
    pub style: String,
    pub link: String,
    pub title: String,
    pub description: String,
    pub floating_button: bool,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
}

/// Chrome strip between hero and body; product copy, not tenant data.
static STATUS_ITEMS: Lazy<Vec<StatusItemView>> = Lazy::new(|| {
    vec![
        StatusItemView {
            label: "Mandato".to_string(),
            value: "Em exercício".to_string(),
        },
        StatusItemView {
            label: "Gabinete".to_string(),
            value: "Aberto à população".to_string(),
        },
        StatusItemView {
            label: "Atendimento".to_string(),
            value: "Presencial e online".to_string(),
        },
    ]
});

/// Flattened render plan for the site template. Field order mirrors the
/// composer's fixed render order; an absent option means the composer
/// omitted that block.
pub struct SitePageView {
    pub meta: MetaView,
    pub theme: ThemeView,
    pub hero: Option<HeroView>,
    pub show_status: bool,
    pub status_items: Vec<StatusItemView>,
    pub video: Option<VideoView>,
    pub gallery: Option<GalleryView>,
    pub news: Option<NewsView>,
    pub bio: Option<BioView>,
    pub projects: Option<ProjectsView>,
    pub whatsapp: Option<WhatsappView>,
    pub footer: Option<FooterView>,
}

impl SitePageView {
    pub fn from_resolved(site: ResolvedSite) -> Self {
        let ResolvedSite {
            tenant,
            config,
            plan,
        } = site;

        let mut view = Self {
            meta: MetaView {
                title: config.meta.title.clone(),
                description: config.meta.description.clone(),
            },
            theme: ThemeView {
                primary: config.theme.primary.clone(),
                secondary: config.theme.secondary.clone(),
                background: config.theme.background.clone(),
                text: config.theme.text.clone(),
                font: config.theme.font.clone(),
            },
            hero: None,
            show_status: false,
            status_items: STATUS_ITEMS.clone(),
            video: None,
            gallery: None,
            news: None,
            bio: None,
            projects: None,
            whatsapp: None,
            footer: None,
        };

        for instruction in plan.into_instructions() {
            match instruction {
                RenderInstruction::Hero(hero) => {
                    view.hero = Some(HeroView {
                        style: style_attr(&hero.style),
                        title: hero.title,
                        subtitle: hero.subtitle,
                        badge_number: hero.badge_number,
                        background_image: hero.background_image,
                    });
                }
                RenderInstruction::Status => view.show_status = true,
                RenderInstruction::Video(video) => {
                    view.video = Some(VideoView {
                        style: style_attr(&video.style),
                        title: video.title,
                        url: video.url,
                    });
                }
                RenderInstruction::Gallery(gallery) => {
                    view.gallery = Some(GalleryView {
                        style: style_attr(&gallery.style),
                        title: gallery.title,
                        images: gallery.images,
                    });
                }
                RenderInstruction::News(news) => {
                    view.news = Some(NewsView {
                        style: style_attr(&news.style),
                        title: news.title,
                        posts: news
                            .posts
                            .into_iter()
                            .map(|post| NewsPostView {
                                date: post.date,
                                title: post.title,
                                snippet: post.snippet,
                            })
                            .collect(),
                    });
                }
                RenderInstruction::Bio(bio) => {
                    view.bio = Some(BioView {
                        style: style_attr(&bio.style),
                        heading: bio.heading,
                        body: bio.body,
                    });
                }
                RenderInstruction::Projects(projects) => {
                    view.projects = Some(ProjectsView {
                        style: style_attr(&projects.style),
                        heading: projects.heading,
                        items: projects
                            .items
                            .into_iter()
                            .map(|item| ProjectItemView {
                                title: item.title,
                                description: item.description,
                            })
                            .collect(),
                    });
                }
                RenderInstruction::Whatsapp(whatsapp) => {
                    view.whatsapp = Some(WhatsappView {
                        style: style_attr(&whatsapp.style),
                        link: whatsapp.link,
                        title: whatsapp.title,
                        description: whatsapp.description,
                        floating_button: whatsapp.floating_button,
                    });
                }
                RenderInstruction::Footer => {
                    view.footer = Some(FooterView {
                        copy: format!("© Gabinete de {} — site informativo do mandato", tenant.name),
                    });
                }
            }
        }

        view
    }
}

fn style_attr(style: &SectionStyle) -> String {
    let mut css = String::new();
    if let Some(bg) = style.bg_color.as_deref() {
        css.push_str("background-color:");
        css.push_str(bg);
        css.push(';');
    }
    if let Some(text) = style.text_color.as_deref() {
        css.push_str("color:");
        css.push_str(text);
        css.push(';');
    }
    css
}

#[derive(Template)]
#[template(path = "site.html")]
pub struct SiteTemplate {
    pub view: SitePageView,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub retry_hint: bool,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Site não encontrado".to_string(),
            message: "O endereço informado não corresponde a nenhum gabinete publicado."
                .to_string(),
            retry_hint: false,
        }
    }

    pub fn lookup_failed() -> Self {
        Self {
            title: "Site temporariamente indisponível".to_string(),
            message: "Não foi possível carregar este site agora. Tente novamente em instantes."
                .to_string(),
            retry_hint: true,
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: ErrorPageView,
}
