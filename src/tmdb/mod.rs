//! TMDB remote API surface.
//!
//! [`TmdbApi`] is the seam the gatherer talks to. [`TmdbClient`] is the
//! reqwest-backed implementation; tests substitute their own.

mod client;
mod images;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;

pub use client::TmdbClient;
pub use images::{ImageHelper, ImageUrlBuilder};
pub use models::{
    ApiConfiguration, EpisodeDetail, Genre, ImagesConfiguration, MovieDetail, MovieSearchResult,
    SeasonDetail, TvDetail, TvSearchResult,
};

use crate::config::TmdbConfig;
use crate::error::Result;

/// Read-only operations against TMDB.
///
/// Season and episode lookups return `Ok(None)` when TMDB does not know
/// the resource; every other failure is an error.
#[async_trait]
pub trait TmdbApi: Send + Sync {
    /// Image base URLs and available sizes.
    async fn configuration(&self) -> Result<ApiConfiguration>;

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSearchResult>>;

    async fn search_tv(&self, query: &str) -> Result<Vec<TvSearchResult>>;

    async fn movie(&self, id: u64) -> Result<MovieDetail>;

    async fn tv_show(&self, id: u64) -> Result<TvDetail>;

    async fn season(&self, tv_id: u64, season: u32) -> Result<Option<SeasonDetail>>;

    async fn episode(&self, tv_id: u64, season: u32, episode: u32)
        -> Result<Option<EpisodeDetail>>;
}

/// Builds an authenticated [`TmdbApi`] once the API key is known.
pub trait Connector: Send + Sync {
    fn connect(&self, api_key: &str) -> Arc<dyn TmdbApi>;
}

/// [`Connector`] producing [`TmdbClient`]s from the `[tmdb]` config section.
#[derive(Debug, Clone, Default)]
pub struct HttpConnector {
    config: TmdbConfig,
}

impl HttpConnector {
    pub fn new(config: TmdbConfig) -> Self {
        Self { config }
    }
}

impl Connector for HttpConnector {
    fn connect(&self, api_key: &str) -> Arc<dyn TmdbApi> {
        Arc::new(TmdbClient::new(api_key, &self.config))
    }
}
