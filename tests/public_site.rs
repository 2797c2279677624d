use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use mandato::application::site::SiteService;
use mandato::infra::http::{HttpState, build_router};
use mandato::infra::store::FileSiteStore;

async fn router_with_sites(
    fixtures: &[(&str, &str)],
) -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    for (slug, contents) in fixtures {
        tokio::fs::write(dir.path().join(format!("{slug}.json")), contents)
            .await
            .expect("write fixture");
    }

    let store = FileSiteStore::new(dir.path()).expect("store");
    let sites = Arc::new(SiteService::new(Arc::new(store)));
    let router = build_router(HttpState { sites });
    (dir, router)
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = response.into_body().collect().await.expect("body").to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn renders_configured_site() {
    let envelope = json!({
        "name": "Ana Souza",
        "config": {
            "sections": {
                "hero": { "title": "Ana Souza presente", "badgeNumber": "45678" },
                "news": {
                    "enabled": true,
                    "posts": [
                        { "title": "Nova creche aprovada", "snippet": "Emenda destinada ao bairro." }
                    ]
                }
            }
        }
    })
    .to_string();
    let (_dir, router) = router_with_sites(&[("ana-souza", &envelope)]).await;

    let (status, body) = get(router, "/s/ana-souza").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ana Souza presente"));
    assert!(body.contains("45678"));
    assert!(body.contains("data-section=\"news\""));
    assert!(body.contains("Nova creche aprovada"));
    assert!(body.contains("Emenda destinada ao bairro."));
    // Disabled by default and absent from the document.
    assert!(!body.contains("data-section=\"video\""));
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let (_dir, router) = router_with_sites(&[]).await;

    let (status, body) = get(router, "/s/nao-existe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Site não encontrado"));
}

#[tokio::test]
async fn corrupt_record_still_renders_default_site() {
    let (_dir, router) = router_with_sites(&[("ana-souza", "{ broken")]).await;

    let (status, body) = get(router, "/s/ana-souza").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Vereador Ana Souza"));
    assert!(body.contains("data-section=\"hero\""));
    assert!(body.contains("data-section=\"footer\""));
}

#[tokio::test]
async fn responses_carry_html_content_type() {
    let envelope = json!({ "name": "Ana Souza", "config": {} }).to_string();
    let (_dir, router) = router_with_sites(&[("ana-souza", &envelope)]).await;

    let response = router
        .oneshot(
            Request::get("/s/ana-souza")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn health_endpoint_is_silent() {
    let (_dir, router) = router_with_sites(&[]).await;

    let (status, body) = get(router, "/_health").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn fallback_is_not_found() {
    let (_dir, router) = router_with_sites(&[]).await;

    let (status, _body) = get(router, "/definitely/not/a/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
