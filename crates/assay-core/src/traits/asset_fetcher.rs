//! AssetFetcher trait: the only I/O-bound collaborator.
//!
//! The core never retries or caches; pagination, sampling, retry and
//! rate-limit handling belong to implementations.

use crate::errors::FetchError;
use crate::types::{AssessmentScope, AssetRecord, TenantConfiguration};

/// Source of raw asset records.
pub trait AssetFetcher: Send + Sync {
    /// Fetch every asset inside `scope`.
    fn fetch_assets(
        &self,
        scope: &AssessmentScope,
        tenant: &TenantConfiguration,
    ) -> Result<Vec<AssetRecord>, FetchError>;

    /// Fetch a single asset by GUID.
    fn fetch_asset(
        &self,
        guid: &str,
        tenant: &TenantConfiguration,
    ) -> Result<Option<AssetRecord>, FetchError>;

    /// Number of assets inside `scope`.
    fn count_assets(
        &self,
        scope: &AssessmentScope,
        tenant: &TenantConfiguration,
    ) -> Result<usize, FetchError> {
        self.fetch_assets(scope, tenant).map(|assets| assets.len())
    }
}

/// In-memory fetcher over a fixed record list. Used in standalone mode and
/// in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetFetcher {
    assets: Vec<AssetRecord>,
}

impl StaticAssetFetcher {
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        Self { assets }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetFetcher for StaticAssetFetcher {
    fn fetch_assets(
        &self,
        scope: &AssessmentScope,
        _tenant: &TenantConfiguration,
    ) -> Result<Vec<AssetRecord>, FetchError> {
        if scope.limit == Some(0) {
            return Err(FetchError::InvalidScope("limit must be greater than 0".into()));
        }
        let limit = scope.limit.unwrap_or(usize::MAX);
        Ok(self
            .assets
            .iter()
            .filter(|a| scope.matches(a))
            .take(limit)
            .cloned()
            .collect())
    }

    fn fetch_asset(
        &self,
        guid: &str,
        _tenant: &TenantConfiguration,
    ) -> Result<Option<AssetRecord>, FetchError> {
        Ok(self.assets.iter().find(|a| a.guid == guid).cloned())
    }

    fn count_assets(
        &self,
        scope: &AssessmentScope,
        tenant: &TenantConfiguration,
    ) -> Result<usize, FetchError> {
        if scope.limit.is_none() {
            return Ok(self.assets.iter().filter(|a| scope.matches(a)).count());
        }
        self.fetch_assets(scope, tenant).map(|assets| assets.len())
    }
}
