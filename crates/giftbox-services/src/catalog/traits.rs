//! Asset catalog abstraction
//!
//! The resolver and the cache only see [`AssetCatalog`]; the Airtable client is one
//! implementation, tests use in-memory ones.

use async_trait::async_trait;

use super::{CatalogFilter, CatalogRecord, CatalogResult};

/// Read access to the asset library table.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Return every row matching `filter`, following pagination to the end.
    async fn query(&self, filter: &CatalogFilter) -> CatalogResult<Vec<CatalogRecord>>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
