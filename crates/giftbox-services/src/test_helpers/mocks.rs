//! Mock catalog, logo host and clock implementations

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::catalog::{AssetCatalog, CatalogError, CatalogFilter, CatalogRecord, CatalogResult, Clock};
use crate::logo_host::{LogoFile, LogoHost, UploadError, UploadResult};

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let delta = TimeDelta::from_std(by).unwrap_or_else(|_| TimeDelta::zero());
        let mut now = self.now.lock().unwrap();
        *now = *now + delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        // 2024-10-01T00:00:00Z
        Self::new(
            Utc.timestamp_opt(1_727_740_800, 0)
                .single()
                .unwrap_or_else(Utc::now),
        )
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// In-memory catalog. Honors the combo-key part of a filter and records every query.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    records: Vec<CatalogRecord>,
    calls: AtomicUsize,
    filters: Mutex<Vec<CatalogFilter>>,
}

impl StaticCatalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
            filters: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn filters(&self) -> Vec<CatalogFilter> {
        self.filters.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetCatalog for StaticCatalog {
    async fn query(&self, filter: &CatalogFilter) -> CatalogResult<Vec<CatalogRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.filters.lock().unwrap().push(filter.clone());

        Ok(self
            .records
            .iter()
            .filter(|record| match &filter.combo_key {
                Some(key) => record.fields.combo_key.as_deref() == Some(key.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "static"
    }
}

/// Catalog that is always unreachable.
#[derive(Debug, Default)]
pub struct FailingCatalog {
    calls: AtomicUsize,
}

impl FailingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetCatalog for FailingCatalog {
    async fn query(&self, _filter: &CatalogFilter) -> CatalogResult<Vec<CatalogRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// Logo host that accepts everything and returns a fixed URL.
#[derive(Debug)]
pub struct StaticLogoHost {
    url: String,
    uploads: Mutex<Vec<LogoFile>>,
}

impl StaticLogoHost {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<LogoFile> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogoHost for StaticLogoHost {
    async fn upload(&self, logo: &LogoFile) -> UploadResult<String> {
        self.uploads.lock().unwrap().push(logo.clone());
        Ok(self.url.clone())
    }

    fn backend_name(&self) -> &'static str {
        "static"
    }
}

/// Logo host that rejects every upload.
#[derive(Debug, Default)]
pub struct FailingLogoHost;

#[async_trait]
impl LogoHost for FailingLogoHost {
    async fn upload(&self, _logo: &LogoFile) -> UploadResult<String> {
        Err(UploadError::Rejected {
            status: 400,
            body: "Invalid API v1 key.".to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
