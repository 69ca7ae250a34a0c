//! The TMDB metadata gatherer.
//!
//! [`TmdbGatherer`] is the plugin the host drives: it registers its API key
//! preference, loads it, and answers `get_metadata` lookups by parsing the
//! filename and walking the TMDB movie and TV endpoints. Every remote or
//! mapping failure is caught at one boundary and reported through
//! [`GatherOutcome`]; nothing is ever propagated to the host.

mod dates;
mod genres;
mod matching;
mod movie;
mod result;
mod tv;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

pub use genres::extract_genres;
pub use matching::{best_match, SearchCandidate};
pub use result::{GatherOutcome, GatheredMetadata, SkipReason};

use self::matching::Selection;
use crate::config::{Config, MatchPolicy};
use crate::error::Result;
use crate::host::{
    ArtAggregator, ArtCandidate, FilenameParser, GatherTypes, MediaInfo, MetadataSource,
    PreferenceDef, PreferenceKind, PreferenceStore, ReleaseInfo, SceneFilenameParser,
};
use crate::tmdb::{Connector, HttpConnector, ImageHelper, TmdbApi};

/// Value of the `plugin` field on every log event.
pub const PLUGIN_ID: &str = "tmdb";

/// Host preference holding the API key.
pub const API_KEY_PREFERENCE: &str = "tmdb_api_key";

/// Static plugin descriptor as presented to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub categories: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub version: &'static str,
    pub min_host_version: &'static str,
    pub max_host_version: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Tmdb",
    categories: "metadata",
    description: "Tmdb metadata integration",
    url: "https://www.themoviedb.org",
    version: "000002",
    min_host_version: "370009",
    max_host_version: "999999",
};

/// Knobs the gatherer takes from configuration.
#[derive(Debug, Clone)]
pub struct GathererSettings {
    pub image_size: String,
    pub policy: MatchPolicy,
}

impl Default for GathererSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for GathererSettings {
    fn from(config: &Config) -> Self {
        Self {
            image_size: config.tmdb.image_size.clone(),
            policy: config.matching.policy,
        }
    }
}

pub struct TmdbGatherer {
    connector: Arc<dyn Connector>,
    parser: Arc<dyn FilenameParser>,
    settings: GathererSettings,
    api: Option<Arc<dyn TmdbApi>>,
}

impl TmdbGatherer {
    /// Gatherer talking to TMDB over HTTP with the scene filename parser.
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            Arc::new(HttpConnector::new(config.tmdb.clone())),
            Arc::new(SceneFilenameParser),
            GathererSettings::from(config),
        )
    }

    pub fn with_parts(
        connector: Arc<dyn Connector>,
        parser: Arc<dyn FilenameParser>,
        settings: GathererSettings,
    ) -> Self {
        Self {
            connector,
            parser,
            settings,
            api: None,
        }
    }

    pub fn info(&self) -> PluginInfo {
        PLUGIN_INFO
    }

    /// Register the API key preference. `false` if it already exists or
    /// the store refused it.
    pub fn install(&self, prefs: &mut dyn PreferenceStore) -> bool {
        if prefs.exists(API_KEY_PREFERENCE) {
            return false;
        }

        let def = PreferenceDef {
            name: API_KEY_PREFERENCE.to_string(),
            description: "Tmdb api key".to_string(),
            default: String::new(),
            level: 75,
            kind: PreferenceKind::String,
            category: "plugins".to_string(),
        };

        match prefs.insert(def) {
            Ok(()) => {
                info!(plugin = PLUGIN_ID, "Installed TMDB preferences");
                true
            }
            Err(e) => {
                warn!(plugin = PLUGIN_ID, error = %e, "Failed to install TMDB preferences");
                false
            }
        }
    }

    pub fn uninstall(&self, prefs: &mut dyn PreferenceStore) -> bool {
        if let Err(e) = prefs.delete(API_KEY_PREFERENCE) {
            debug!(plugin = PLUGIN_ID, error = %e, "Nothing to uninstall");
        }
        true
    }

    /// Read the API key and connect. A blank key leaves the gatherer as it
    /// was and returns `false`.
    pub fn load(&mut self, prefs: &dyn PreferenceStore) -> bool {
        let key = prefs
            .get(API_KEY_PREFERENCE)
            .map(|k| k.trim().to_string())
            .unwrap_or_default();

        if key.is_empty() {
            debug!(plugin = PLUGIN_ID, "No TMDB api key, metadata plugin skipped");
            return false;
        }

        self.api = Some(self.connector.connect(&key));
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.api.is_some()
    }

    /// Look up metadata for one media file.
    pub async fn get_metadata(&self, types: &GatherTypes, media: &MediaInfo) -> GatherOutcome {
        debug!(plugin = PLUGIN_ID, file = %media.file.display(), "Getting metadata from TMDB");

        if !types.is_supported() {
            debug!(plugin = PLUGIN_ID, "Not a valid media type, skipped");
            return GatherOutcome::Skipped(SkipReason::UnsupportedMediaType);
        }

        let Some(api) = self.api.as_deref() else {
            debug!(plugin = PLUGIN_ID, "Plugin not loaded, skipped");
            return GatherOutcome::Skipped(SkipReason::NotLoaded);
        };

        let Some(release) = self.parser.parse(&media.file, types) else {
            debug!(plugin = PLUGIN_ID, "Could not parse title from filename, skipped");
            return GatherOutcome::Skipped(SkipReason::UnparseableFilename);
        };

        let mut metadata = GatheredMetadata::seeded(types, &release);

        match self.resolve(api, types, media, &release, &mut metadata).await {
            Ok(true) => GatherOutcome::Matched(metadata),
            Ok(false) => GatherOutcome::Unmatched(metadata),
            Err(error) => {
                error!(plugin = PLUGIN_ID, error = %error, "Error getting metadata");
                GatherOutcome::Failed {
                    partial: metadata,
                    error,
                }
            }
        }
    }

    /// Delegate art lookup to the host aggregator with this gatherer as
    /// the metadata source.
    pub async fn gather_arts(
        &self,
        aggregator: &dyn ArtAggregator,
        art_type: &str,
        options: &MediaInfo,
        limit: usize,
    ) -> Vec<ArtCandidate> {
        debug!(plugin = PLUGIN_ID, art_type, limit, "Gathering art from TMDB");
        aggregator
            .gather_from_source(self, art_type, options, limit)
            .await
    }

    /// Movie branch first, then TV; later writes win for shared keys.
    async fn resolve(
        &self,
        api: &dyn TmdbApi,
        types: &GatherTypes,
        media: &MediaInfo,
        release: &ReleaseInfo,
        metadata: &mut GatheredMetadata,
    ) -> Result<bool> {
        let configuration = api.configuration().await?;
        let images = ImageHelper::new(&configuration.images, &self.settings.image_size);

        let selection = Selection {
            policy: self.settings.policy,
            preferred_title: media.preferred_title(),
            year: release.year,
        };

        let mut matched = false;
        if types.has_movie() {
            matched |= movie::resolve_movie(api, &images, &selection, metadata).await?;
        }
        if types.has_tvshow() {
            matched |= tv::resolve_tv(api, &images, &selection, media, metadata).await?;
        }

        Ok(matched)
    }
}

#[async_trait]
impl MetadataSource for TmdbGatherer {
    fn name(&self) -> &'static str {
        PLUGIN_INFO.name
    }

    async fn get_metadata(&self, types: &GatherTypes, media: &MediaInfo) -> GatherOutcome {
        TmdbGatherer::get_metadata(self, types, media).await
    }
}
