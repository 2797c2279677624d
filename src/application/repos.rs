//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::site::TenantSite;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("lookup timed out")]
    Timeout,
}

impl LookupError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// What the lookup collaborator hands the engine: the tenant identity plus
/// the stored settings blob exactly as persisted, which may be absent, from
/// an older schema, or malformed. The engine never writes it back.
#[derive(Debug, Clone)]
pub struct SiteRecord {
    pub tenant: TenantSite,
    pub raw_config: Option<Value>,
}

/// Resolves a public slug to a tenant site record.
///
/// `Ok(None)` means the slug is unknown; `Err` means the lookup itself
/// failed and the caller should surface a retry-eligible outcome.
#[async_trait]
pub trait SiteLookupRepo: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<SiteRecord>, LookupError>;
}
