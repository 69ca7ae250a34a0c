use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::host::{GatherTypes, ReleaseInfo};

/// Normalized metadata accumulated during one lookup.
///
/// Field names are the host's result keys. Fields are only ever added or
/// overwritten, unset ones are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatheredMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_tvshow_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Unix timestamp (seconds) of the release day at midnight UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_art: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow_season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow_episode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow_art: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow_background_art: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvshow_season_art: Option<String>,
}

impl GatheredMetadata {
    /// Fields known from the filename alone, before any remote call.
    pub fn seeded(types: &GatherTypes, release: &ReleaseInfo) -> Self {
        let mut metadata = Self {
            year: release.year,
            ..Default::default()
        };

        if types.has_movie() {
            metadata.title = Some(release.title.clone());
        }

        if types.has_tvshow() {
            metadata.tvshow = Some(release.title.trim().to_string());
            metadata.tvshow_season = release.season;
            metadata.tvshow_episode = release.episode;
        }

        metadata
    }
}

/// Why a lookup was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No API key was loaded.
    NotLoaded,
    /// Neither `movie` nor `tvshow` was requested.
    UnsupportedMediaType,
    /// The filename parser produced nothing usable.
    UnparseableFilename,
}

/// Result of a single [`get_metadata`](super::TmdbGatherer::get_metadata) call.
#[derive(Debug)]
pub enum GatherOutcome {
    Skipped(SkipReason),
    /// At least one branch matched a remote record.
    Matched(GatheredMetadata),
    /// Searches ran but found nothing; only parsed fields are set.
    Unmatched(GatheredMetadata),
    /// A remote or mapping fault; `partial` holds what was set before it.
    Failed {
        partial: GatheredMetadata,
        error: Error,
    },
}

impl GatherOutcome {
    /// The host's view: nothing for a skip, the (possibly partial) record
    /// otherwise.
    pub fn into_metadata(self) -> Option<GatheredMetadata> {
        match self {
            GatherOutcome::Skipped(_) => None,
            GatherOutcome::Matched(metadata)
            | GatherOutcome::Unmatched(metadata)
            | GatherOutcome::Failed {
                partial: metadata, ..
            } => Some(metadata),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            GatherOutcome::Skipped(_) => "skipped",
            GatherOutcome::Matched(_) => "matched",
            GatherOutcome::Unmatched(_) => "unmatched",
            GatherOutcome::Failed { .. } => "failed",
        }
    }
}
