use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// API key. The plugin normally reads it from the host preference
    /// `tmdb_api_key`; the CLI seeds that preference from here.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Response language sent with every request (default: en-US)
    #[serde(default = "default_language")]
    pub language: String,

    /// API root, overridable for tests and proxies
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Image size segment used when building artwork URLs (default: original)
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: default_language(),
            base_url: default_base_url(),
            image_size: default_image_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TmdbConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_size() -> String {
    "original".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub policy: MatchPolicy,
}

/// How a search result is chosen from a non-empty result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Take the first result as returned by TMDB.
    #[default]
    First,
    /// Prefer an exact title match, then a matching year.
    BestTitle,
}
