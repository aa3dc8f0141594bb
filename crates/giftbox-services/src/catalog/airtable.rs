//! Airtable-backed asset catalog.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use super::{AssetCatalog, CatalogError, CatalogFilter, CatalogRecord, CatalogResult};

/// Connection settings for [`AirtableCatalog`].
#[derive(Clone)]
pub struct AirtableSettings {
    pub api_url: String,
    pub api_key: String,
    pub base_id: String,
    pub table: String,
    pub timeout: Duration,
    pub max_pages: usize,
}

impl Debug for AirtableSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AirtableSettings")
            .field("api_url", &self.api_url)
            .field("base_id", &self.base_id)
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    records: Vec<CatalogRecord>,
    #[serde(default)]
    offset: Option<String>,
}

/// Queries the asset library table through the Airtable REST API.
pub struct AirtableCatalog {
    http_client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    timeout: Duration,
    max_pages: usize,
}

impl Debug for AirtableCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AirtableCatalog")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl AirtableCatalog {
    pub fn new(settings: AirtableSettings) -> CatalogResult<Self> {
        let endpoint = table_endpoint(&settings.api_url, &settings.base_id, &settings.table)?;

        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| CatalogError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
            api_key: settings.api_key,
            timeout: settings.timeout,
            max_pages: settings.max_pages.max(1),
        })
    }

    async fn fetch_page(&self, formula: &str, offset: Option<&str>) -> CatalogResult<RecordPage> {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("filterByFormula", formula);
            if let Some(offset) = offset {
                query.append_pair("offset", offset);
            }
        }

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CatalogError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::from_reqwest(e, self.timeout))?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

/// `{api_url}/v0/{base_id}/{table}` with every segment percent-encoded.
fn table_endpoint(api_url: &str, base_id: &str, table: &str) -> CatalogResult<Url> {
    let mut url = Url::parse(api_url)
        .map_err(|e| CatalogError::Config(format!("Invalid catalog URL '{}': {}", api_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| CatalogError::Config(format!("Catalog URL '{}' cannot be a base", api_url)))?
        .pop_if_empty()
        .extend(["v0", base_id, table]);
    Ok(url)
}

#[async_trait]
impl AssetCatalog for AirtableCatalog {
    #[tracing::instrument(skip(self, filter), fields(formula = tracing::field::Empty))]
    async fn query(&self, filter: &CatalogFilter) -> CatalogResult<Vec<CatalogRecord>> {
        let formula = filter.to_formula();
        tracing::Span::current().record("formula", formula.as_str());

        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        for page in 1..=self.max_pages {
            let result = self.fetch_page(&formula, offset.as_deref()).await?;
            records.extend(result.records);

            match result.offset {
                Some(next) if !next.is_empty() => {
                    if page == self.max_pages {
                        tracing::warn!(
                            max_pages = self.max_pages,
                            records = records.len(),
                            "Catalog has more pages than allowed, truncating"
                        );
                    }
                    offset = Some(next);
                }
                _ => break,
            }
        }

        tracing::debug!(records = records.len(), "Catalog query complete");
        Ok(records)
    }

    fn backend_name(&self) -> &'static str {
        "airtable"
    }
}
