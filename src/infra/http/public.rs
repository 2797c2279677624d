use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    application::site::{SiteOutcome, SiteService},
    presentation::views::{
        SitePageView, SiteTemplate, render_lookup_failed_response, render_not_found_response,
        render_template_response,
    },
};

use super::middleware::{log_responses, set_request_context};

#[derive(Clone)]
pub struct HttpState {
    pub sites: Arc<SiteService>,
}

/// Public, unauthenticated router. The slug path is the only tenant-facing
/// entry point and must never sit behind session gating.
pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/s/{slug}", get(site_page))
        .route("/_health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn site_page(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    match state.sites.resolve(&slug).await {
        SiteOutcome::Found(site) => {
            let view = SitePageView::from_resolved(*site);
            render_template_response(SiteTemplate { view }, StatusCode::OK)
        }
        SiteOutcome::NotFound => render_not_found_response(),
        SiteOutcome::LookupFailed(err) => render_lookup_failed_response(&err),
    }
}

async fn health() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

async fn not_found() -> Response {
    render_not_found_response()
}
