//! Test helpers: build AppState and router for integration tests.
//!
//! The catalog, logo host and clock are in-memory doubles from
//! `giftbox_services::test_helpers`, so no test touches the network unless it starts its
//! own mockito server.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;
use giftbox_api::setup::routes;
use giftbox_api::state::AppState;
use giftbox_core::{Config, CustomizerConfig};
use giftbox_services::test_helpers::{ManualClock, StaticLogoHost};
use giftbox_services::{AssetCatalog, InlineDataUrlHost, LogoHost};

pub const HOSTED_LOGO_URL: &str = "https://i.ibb.co/test/acme_logo.png";

/// Test application: server plus handles on the doubles behind it.
pub struct TestApp {
    pub server: TestServer,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Builder for a [`TestApp`]. Defaults: no catalog, inline data-URL logo host.
pub struct TestAppBuilder {
    config: CustomizerConfig,
    catalog: Option<Arc<dyn AssetCatalog>>,
    logo_host: Arc<dyn LogoHost>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: CustomizerConfig::default(),
            catalog: None,
            logo_host: Arc::new(InlineDataUrlHost),
        }
    }
}

impl TestAppBuilder {
    pub fn catalog(mut self, catalog: Arc<dyn AssetCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn logo_host(mut self, host: Arc<dyn LogoHost>) -> Self {
        self.logo_host = host;
        self
    }

    pub fn logo_max_size_bytes(mut self, limit: usize) -> Self {
        self.config.logo_max_size_bytes = limit;
        self
    }

    pub fn build(self) -> TestApp {
        let config = Config(Box::new(self.config));
        let clock = Arc::new(ManualClock::default());
        let state = AppState::new(
            config.clone(),
            self.catalog,
            self.logo_host,
            clock.clone(),
        );

        let router = routes::setup_routes(&config, Arc::new(state)).expect("router");
        let server = TestServer::new(router).expect("test server");

        TestApp { server, clock }
    }
}

/// App with no catalog and inline logo hosting.
pub fn setup_test_app() -> TestApp {
    TestAppBuilder::default().build()
}

/// App whose logo host always returns [`HOSTED_LOGO_URL`].
pub fn setup_hosted_logo_app() -> (TestApp, Arc<StaticLogoHost>) {
    let host = Arc::new(StaticLogoHost::new(HOSTED_LOGO_URL));
    let app = TestAppBuilder::default().logo_host(host.clone()).build();
    (app, host)
}
