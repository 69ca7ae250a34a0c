//! HTTP client for the TMDB v3 API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{
    ApiConfiguration, EpisodeDetail, MovieDetail, MovieSearchResult, SearchResponse,
    SeasonDetail, TvDetail, TvSearchResult,
};
use super::TmdbApi;
use crate::config::TmdbConfig;
use crate::error::{Error, Result};

pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, config: &TmdbConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build HTTP client with timeout, using defaults");
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: config.language.clone(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, extra_params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", &self.api_key),
            ("language", &self.language),
        ];
        params.extend_from_slice(extra_params);

        debug!(path, "TMDB request");
        let resp = self.http.get(&url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            debug!(path, status = status.as_u16(), "TMDB request rejected");
            return Err(Error::status(status.as_u16(), path));
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(path, e))
    }

    /// Like [`get`](Self::get) but maps a 404 to `None`.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get(path, &[]).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn configuration(&self) -> Result<ApiConfiguration> {
        self.get("/configuration", &[]).await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSearchResult>> {
        let resp: SearchResponse<MovieSearchResult> =
            self.get("/search/movie", &[("query", query)]).await?;
        Ok(resp.results)
    }

    async fn search_tv(&self, query: &str) -> Result<Vec<TvSearchResult>> {
        let resp: SearchResponse<TvSearchResult> =
            self.get("/search/tv", &[("query", query)]).await?;
        Ok(resp.results)
    }

    async fn movie(&self, id: u64) -> Result<MovieDetail> {
        self.get(&format!("/movie/{id}"), &[]).await
    }

    async fn tv_show(&self, id: u64) -> Result<TvDetail> {
        self.get(&format!("/tv/{id}"), &[]).await
    }

    async fn season(&self, tv_id: u64, season: u32) -> Result<Option<SeasonDetail>> {
        self.get_optional(&format!("/tv/{tv_id}/season/{season}")).await
    }

    async fn episode(&self, tv_id: u64, season: u32, episode: u32) -> Result<Option<EpisodeDetail>> {
        self.get_optional(&format!("/tv/{tv_id}/season/{season}/episode/{episode}"))
            .await
    }
}
