//! Filesystem-backed site lookup.
//!
//! Each tenant site lives in `<sites_dir>/<slug>.json` as a small envelope:
//! `{ "name": "...", "config": { ... } }`. The `config` value is the raw
//! settings blob handed verbatim to the resolver. This adapter is the
//! default stand-in for whatever system of record fronts the engine in a
//! larger deployment; anything implementing [`SiteLookupRepo`] can replace
//! it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::application::repos::{LookupError, SiteLookupRepo, SiteRecord};
use crate::domain::site::TenantSite;
use crate::domain::slug::{Slug, humanize_slug};

pub struct FileSiteStore {
    root: PathBuf,
}

/// On-disk tenant envelope; both fields optional so a half-written record
/// still resolves to something renderable.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteEnvelope {
    name: Option<String>,
    config: Option<Value>,
}

impl FileSiteStore {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, slug: &Slug) -> PathBuf {
        self.root.join(format!("{slug}.json"))
    }
}

#[async_trait]
impl SiteLookupRepo for FileSiteStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<SiteRecord>, LookupError> {
        // An unrepresentable slug cannot name a record; it is not a storage
        // failure.
        let Ok(slug) = Slug::new(slug) else {
            return Ok(None);
        };

        let path = self.record_path(&slug);
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(LookupError::from_persistence(err)),
        };

        let envelope = match serde_json::from_str::<SiteEnvelope>(&data) {
            Ok(envelope) => envelope,
            Err(err) => {
                // The record exists, so the tenant does too: degrade to a
                // default site rather than a failed page load.
                warn!(
                    target = "mandato::store",
                    slug = %slug,
                    error = %err,
                    "site record is not valid JSON, treating config as absent"
                );
                SiteEnvelope::default()
            }
        };

        let name = match envelope.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => humanize_slug(&slug),
        };

        Ok(Some(SiteRecord {
            tenant: TenantSite { slug, name },
            raw_config: envelope.config,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn store_with(slug: &str, contents: &str) -> (tempfile::TempDir, FileSiteStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        tokio::fs::write(dir.path().join(format!("{slug}.json")), contents)
            .await
            .expect("write fixture");
        let store = FileSiteStore::new(dir.path()).expect("store");
        (dir, store)
    }

    #[tokio::test]
    async fn reads_envelope_with_name_and_config() {
        let body = json!({
            "name": "Ana Souza",
            "config": { "theme": { "primary": "#111111" } }
        })
        .to_string();
        let (_dir, store) = store_with("ana-souza", &body).await;

        let record = store
            .find_by_slug("ana-souza")
            .await
            .expect("lookup")
            .expect("record");
        assert_eq!(record.tenant.name, "Ana Souza");
        assert!(record.raw_config.is_some());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSiteStore::new(dir.path()).expect("store");
        assert!(store.find_by_slug("nao-existe").await.expect("ok").is_none());
    }

    #[tokio::test]
    async fn invalid_slug_is_not_found_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSiteStore::new(dir.path()).expect("store");
        assert!(
            store
                .find_by_slug("../etc/passwd")
                .await
                .expect("ok")
                .is_none()
        );
    }

    #[tokio::test]
    async fn corrupt_record_degrades_to_absent_config() {
        let (_dir, store) = store_with("ana-souza", "{ definitely not json").await;

        let record = store
            .find_by_slug("ana-souza")
            .await
            .expect("lookup")
            .expect("record");
        assert_eq!(record.tenant.name, "Ana Souza");
        assert!(record.raw_config.is_none());
    }

    #[tokio::test]
    async fn missing_name_falls_back_to_humanized_slug() {
        let body = json!({ "config": {} }).to_string();
        let (_dir, store) = store_with("joao-da-silva", &body).await;

        let record = store
            .find_by_slug("joao-da-silva")
            .await
            .expect("lookup")
            .expect("record");
        assert_eq!(record.tenant.name, "Joao Da Silva");
    }
}
