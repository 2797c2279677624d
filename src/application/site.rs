//! Public site resolution pipeline: slug → lookup → resolve → compose.

use std::sync::Arc;

use metrics::counter;
use tracing::warn;

use crate::application::composer::{RenderPlan, compose};
use crate::application::repos::{LookupError, SiteLookupRepo};
use crate::application::resolver::resolve_site_config;
use crate::domain::site::{SiteConfig, SiteDefaults, TenantSite};

pub const LOOKUP_COUNTER: &str = "mandato_site_lookup_total";

/// One fully-resolved public site, ready for presentation. Request-local
/// and immutable once produced.
#[derive(Debug, Clone)]
pub struct ResolvedSite {
    pub tenant: TenantSite,
    pub config: SiteConfig,
    pub plan: RenderPlan,
}

/// Terminal states of a slug resolution, the entire contract exposed to the
/// presentation layer.
#[derive(Debug)]
pub enum SiteOutcome {
    Found(Box<ResolvedSite>),
    NotFound,
    LookupFailed(LookupError),
}

#[derive(Clone)]
pub struct SiteService {
    lookup: Arc<dyn SiteLookupRepo>,
}

impl SiteService {
    pub fn new(lookup: Arc<dyn SiteLookupRepo>) -> Self {
        Self { lookup }
    }

    /// Run the whole pipeline for one request. Lookup failure is the only
    /// outcome surfaced as an error state; everything downstream of a found
    /// record degrades internally and always yields a renderable site.
    pub async fn resolve(&self, slug: &str) -> SiteOutcome {
        let record = match self.lookup.find_by_slug(slug).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                counter!(LOOKUP_COUNTER, "outcome" => "not_found").increment(1);
                return SiteOutcome::NotFound;
            }
            Err(err) => {
                warn!(
                    target = "mandato::site",
                    slug,
                    error = %err,
                    "site lookup failed"
                );
                counter!(LOOKUP_COUNTER, "outcome" => "failed").increment(1);
                return SiteOutcome::LookupFailed(err);
            }
        };

        let defaults = SiteDefaults::for_tenant(&record.tenant.name);
        let config = resolve_site_config(record.raw_config.as_ref(), &defaults);
        let plan = compose(&config);

        counter!(LOOKUP_COUNTER, "outcome" => "found").increment(1);
        SiteOutcome::Found(Box::new(ResolvedSite {
            tenant: record.tenant,
            config,
            plan,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::SiteRecord;
    use crate::domain::slug::Slug;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;

    struct InMemoryLookup {
        records: HashMap<String, SiteRecord>,
        fail: bool,
    }

    impl InMemoryLookup {
        fn with_record(slug: &str, name: &str, raw: Option<serde_json::Value>) -> Self {
            let mut records = HashMap::new();
            records.insert(
                slug.to_string(),
                SiteRecord {
                    tenant: TenantSite {
                        slug: Slug::new(slug).expect("valid slug"),
                        name: name.to_string(),
                    },
                    raw_config: raw,
                },
            );
            Self {
                records,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl SiteLookupRepo for InMemoryLookup {
        async fn find_by_slug(&self, slug: &str) -> Result<Option<SiteRecord>, LookupError> {
            if self.fail {
                return Err(LookupError::Persistence("store offline".to_string()));
            }
            Ok(self.records.get(slug).cloned())
        }
    }

    #[tokio::test]
    async fn found_record_resolves_and_composes() {
        let raw = json!({ "sections": { "hero": { "badgeNumber": "45" } } });
        let service = SiteService::new(Arc::new(InMemoryLookup::with_record(
            "ana-souza",
            "Ana Souza",
            Some(raw),
        )));

        match service.resolve("ana-souza").await {
            SiteOutcome::Found(site) => {
                assert_eq!(site.tenant.name, "Ana Souza");
                assert_eq!(site.config.sections.hero.title, "Vereador Ana Souza");
                assert_eq!(
                    site.config.sections.hero.badge_number.as_deref(),
                    Some("45")
                );
                assert_eq!(site.plan.kinds().first(), Some(&"hero"));
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn absent_config_yields_default_site() {
        let service = SiteService::new(Arc::new(InMemoryLookup::with_record(
            "ana-souza",
            "Ana Souza",
            None,
        )));

        match service.resolve("ana-souza").await {
            SiteOutcome::Found(site) => {
                assert!(site.config.sections.bio.enabled);
                assert!(!site.config.sections.video.enabled);
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let service = SiteService::new(Arc::new(InMemoryLookup::with_record(
            "ana-souza",
            "Ana Souza",
            None,
        )));
        assert!(matches!(
            service.resolve("outro-slug").await,
            SiteOutcome::NotFound
        ));
    }

    #[tokio::test]
    async fn lookup_error_surfaces_as_lookup_failed() {
        let service = SiteService::new(Arc::new(InMemoryLookup::failing()));
        assert!(matches!(
            service.resolve("ana-souza").await,
            SiteOutcome::LookupFailed(LookupError::Persistence(_))
        ));
    }
}
