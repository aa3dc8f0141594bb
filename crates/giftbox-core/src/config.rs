//! Configuration module
//!
//! Settings for the HTTP server, the asset catalog, and the logo image host, loaded from the
//! environment (a `.env` file is read first when present).

use std::env;

use crate::constants::{DEFAULT_PRODUCT_NAME, DEFAULT_PRODUCT_SKU};

const SERVER_PORT: u16 = 3001;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const AIRTABLE_BASE_ID: &str = "appXXXXXXXXXX";
const AIRTABLE_TABLE: &str = "Asset_Library";
const AIRTABLE_API_URL: &str = "https://api.airtable.com";
const CATALOG_CACHE_TTL_SECS: u64 = 300;
const CATALOG_TIMEOUT_SECS: u64 = 5;
const CATALOG_MAX_PAGES: usize = 10;
const IMGBB_API_URL: &str = "https://api.imgbb.com/1/upload";
const LOGO_MAX_SIZE_BYTES: usize = 10 * 1024 * 1024;
const UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Server settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub request_timeout_secs: u64,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            server_port: SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Customizer service configuration
#[derive(Clone, Debug)]
pub struct CustomizerConfig {
    pub base: BaseConfig,
    // Catalog (Airtable). No API key means the catalog is unconfigured.
    pub airtable_api_key: Option<String>,
    pub airtable_base_id: String,
    pub airtable_table: String,
    pub airtable_api_url: String,
    pub catalog_cache_ttl_secs: u64,
    pub catalog_timeout_secs: u64,
    pub catalog_max_pages: usize,
    pub product_sku: String,
    pub product_name: String,
    // Logo hosting (ImgBB). No API key means logos are returned as inline data URLs.
    pub imgbb_api_key: Option<String>,
    pub imgbb_api_url: String,
    pub logo_max_size_bytes: usize,
    pub upload_timeout_secs: u64,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig::default(),
            airtable_api_key: None,
            airtable_base_id: AIRTABLE_BASE_ID.to_string(),
            airtable_table: AIRTABLE_TABLE.to_string(),
            airtable_api_url: AIRTABLE_API_URL.to_string(),
            catalog_cache_ttl_secs: CATALOG_CACHE_TTL_SECS,
            catalog_timeout_secs: CATALOG_TIMEOUT_SECS,
            catalog_max_pages: CATALOG_MAX_PAGES,
            product_sku: DEFAULT_PRODUCT_SKU.to_string(),
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            imgbb_api_key: None,
            imgbb_api_url: IMGBB_API_URL.to_string(),
            logo_max_size_bytes: LOGO_MAX_SIZE_BYTES,
            upload_timeout_secs: UPLOAD_TIMEOUT_SECS,
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config(pub Box<CustomizerConfig>);

impl Config {
    fn inner(&self) -> &CustomizerConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.inner().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = CustomizerConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.inner().base.request_timeout_secs
    }

    pub fn airtable_api_key(&self) -> Option<&str> {
        self.inner().airtable_api_key.as_deref()
    }

    pub fn airtable_base_id(&self) -> &str {
        &self.inner().airtable_base_id
    }

    pub fn airtable_table(&self) -> &str {
        &self.inner().airtable_table
    }

    pub fn airtable_api_url(&self) -> &str {
        &self.inner().airtable_api_url
    }

    pub fn catalog_cache_ttl_secs(&self) -> u64 {
        self.inner().catalog_cache_ttl_secs
    }

    pub fn catalog_timeout_secs(&self) -> u64 {
        self.inner().catalog_timeout_secs
    }

    pub fn catalog_max_pages(&self) -> usize {
        self.inner().catalog_max_pages
    }

    pub fn product_sku(&self) -> &str {
        &self.inner().product_sku
    }

    pub fn product_name(&self) -> &str {
        &self.inner().product_name
    }

    pub fn imgbb_api_key(&self) -> Option<&str> {
        self.inner().imgbb_api_key.as_deref()
    }

    pub fn imgbb_api_url(&self) -> &str {
        &self.inner().imgbb_api_url
    }

    pub fn logo_max_size_bytes(&self) -> usize {
        self.inner().logo_max_size_bytes
    }

    pub fn upload_timeout_secs(&self) -> u64 {
        self.inner().upload_timeout_secs
    }
}

/// Treat unset and blank variables the same.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl CustomizerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(REQUEST_TIMEOUT_SECS),
        };

        Ok(CustomizerConfig {
            base,
            airtable_api_key: non_empty_var("AIRTABLE_API_KEY"),
            airtable_base_id: env::var("AIRTABLE_BASE_ID")
                .unwrap_or_else(|_| AIRTABLE_BASE_ID.to_string()),
            airtable_table: env::var("AIRTABLE_TABLE")
                .unwrap_or_else(|_| AIRTABLE_TABLE.to_string()),
            airtable_api_url: env::var("AIRTABLE_API_URL")
                .unwrap_or_else(|_| AIRTABLE_API_URL.to_string()),
            catalog_cache_ttl_secs: env::var("CATALOG_CACHE_TTL_SECS")
                .unwrap_or_else(|_| CATALOG_CACHE_TTL_SECS.to_string())
                .parse()
                .unwrap_or(CATALOG_CACHE_TTL_SECS),
            catalog_timeout_secs: env::var("CATALOG_TIMEOUT_SECS")
                .unwrap_or_else(|_| CATALOG_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CATALOG_TIMEOUT_SECS),
            catalog_max_pages: env::var("CATALOG_MAX_PAGES")
                .unwrap_or_else(|_| CATALOG_MAX_PAGES.to_string())
                .parse()
                .unwrap_or(CATALOG_MAX_PAGES),
            product_sku: env::var("PRODUCT_SKU")
                .unwrap_or_else(|_| DEFAULT_PRODUCT_SKU.to_string()),
            product_name: env::var("PRODUCT_NAME")
                .unwrap_or_else(|_| DEFAULT_PRODUCT_NAME.to_string()),
            imgbb_api_key: non_empty_var("IMGBB_API_KEY"),
            imgbb_api_url: env::var("IMGBB_API_URL")
                .unwrap_or_else(|_| IMGBB_API_URL.to_string()),
            logo_max_size_bytes: env::var("LOGO_MAX_SIZE_BYTES")
                .unwrap_or_else(|_| LOGO_MAX_SIZE_BYTES.to_string())
                .parse()
                .unwrap_or(LOGO_MAX_SIZE_BYTES),
            upload_timeout_secs: env::var("UPLOAD_TIMEOUT_SECS")
                .unwrap_or_else(|_| UPLOAD_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(UPLOAD_TIMEOUT_SECS),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be greater than 0"));
        }

        if self.catalog_cache_ttl_secs == 0 {
            return Err(anyhow::anyhow!(
                "CATALOG_CACHE_TTL_SECS must be greater than 0"
            ));
        }

        if self.catalog_timeout_secs == 0 || self.upload_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "CATALOG_TIMEOUT_SECS and UPLOAD_TIMEOUT_SECS must be greater than 0"
            ));
        }

        if self.catalog_max_pages == 0 {
            return Err(anyhow::anyhow!("CATALOG_MAX_PAGES must be at least 1"));
        }

        if self.product_sku.trim().is_empty() {
            return Err(anyhow::anyhow!("PRODUCT_SKU must not be empty"));
        }

        if self.logo_max_size_bytes == 0 {
            return Err(anyhow::anyhow!("LOGO_MAX_SIZE_BYTES must be greater than 0"));
        }

        for (name, url) in [
            ("AIRTABLE_API_URL", &self.airtable_api_url),
            ("IMGBB_API_URL", &self.imgbb_api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "{} must be an http(s) URL, got '{}'",
                    name,
                    url
                ));
            }
        }

        if self.airtable_api_key.is_some()
            && (self.airtable_base_id.trim().is_empty() || self.airtable_table.trim().is_empty())
        {
            return Err(anyhow::anyhow!(
                "AIRTABLE_BASE_ID and AIRTABLE_TABLE must be set when AIRTABLE_API_KEY is set"
            ));
        }

        Ok(())
    }
}
