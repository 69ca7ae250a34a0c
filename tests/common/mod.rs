//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which starts a wiremock server standing in for
//! the TMDB API and builds clients and gatherers pointed at it.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tmdb_gatherer::config::Config;
use tmdb_gatherer::gatherer::{GathererSettings, TmdbGatherer, API_KEY_PREFERENCE};
use tmdb_gatherer::host::{MemoryPreferences, SceneFilenameParser};
use tmdb_gatherer::tmdb::{HttpConnector, TmdbClient};

pub const API_KEY: &str = "test-key";

/// Mock TMDB server plus a config whose `base_url` points at it.
pub struct TestHarness {
    pub server: MockServer,
    pub config: Config,
}

impl TestHarness {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let mut config = Config::default();
        config.tmdb.base_url = format!("{}/3", server.uri());
        config.tmdb.timeout_secs = 5;
        Self { server, config }
    }

    pub fn client(&self) -> TmdbClient {
        TmdbClient::new(API_KEY, &self.config.tmdb)
    }

    /// Installed and loaded gatherer using the HTTP client.
    pub fn gatherer(&self) -> TmdbGatherer {
        let mut prefs = MemoryPreferences::new();
        let mut gatherer = TmdbGatherer::with_parts(
            Arc::new(HttpConnector::new(self.config.tmdb.clone())),
            Arc::new(SceneFilenameParser),
            GathererSettings::from(&self.config),
        );
        assert!(gatherer.install(&mut prefs));
        prefs.set(API_KEY_PREFERENCE, API_KEY).unwrap();
        assert!(gatherer.load(&prefs));
        gatherer
    }

    /// Answer `GET /3{api_path}` with `body`.
    pub async fn mount_json(&self, api_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/3{api_path}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `GET /3{api_path}` with an empty body and `status`.
    pub async fn mount_status(&self, api_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/3{api_path}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if `GET /3{api_path}` is ever requested.
    pub async fn forbid(&self, api_path: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/3{api_path}")))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_configuration(&self) {
        self.mount_json("/configuration", configuration_body()).await;
    }
}

pub fn configuration_body() -> Value {
    json!({
        "images": {
            "base_url": "http://image.tmdb.org/t/p/",
            "secure_base_url": "https://image.tmdb.org/t/p/",
            "poster_sizes": ["w92", "w500", "original"],
            "backdrop_sizes": ["w300", "original"],
            "still_sizes": ["w92", "original"]
        },
        "change_keys": ["adult"]
    })
}
