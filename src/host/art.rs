use async_trait::async_trait;
use serde::Serialize;

use super::media::{GatherKind, GatherTypes, MediaInfo};
use crate::gatherer::{GatherOutcome, GatheredMetadata};

/// Anything able to answer a metadata lookup.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn get_metadata(&self, types: &GatherTypes, media: &MediaInfo) -> GatherOutcome;
}

/// Which slot an artwork URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtRole {
    Poster,
    Background,
    ShowPoster,
    ShowBackground,
    SeasonPoster,
}

/// A single artwork suggestion returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtCandidate {
    pub url: String,
    pub role: ArtRole,
    pub source: String,
}

/// Host-side art gathering driven by a metadata source.
#[async_trait]
pub trait ArtAggregator: Send + Sync {
    async fn gather_from_source(
        &self,
        source: &dyn MetadataSource,
        art_type: &str,
        options: &MediaInfo,
        limit: usize,
    ) -> Vec<ArtCandidate>;
}

/// Default [`ArtAggregator`]: runs one lookup and lifts the image URLs
/// matching `art_type` out of the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataArtAggregator;

#[async_trait]
impl ArtAggregator for MetadataArtAggregator {
    async fn gather_from_source(
        &self,
        source: &dyn MetadataSource,
        art_type: &str,
        options: &MediaInfo,
        limit: usize,
    ) -> Vec<ArtCandidate> {
        let types: GatherTypes = [gather_kind_for(art_type)].into_iter().collect();

        let Some(metadata) = source.get_metadata(&types, options).await.into_metadata() else {
            return Vec::new();
        };

        art_urls(&metadata, art_type)
            .into_iter()
            .take(limit)
            .map(|(role, url)| ArtCandidate {
                url,
                role,
                source: source.name().to_string(),
            })
            .collect()
    }
}

/// Video art types all resolve through the TV branch, everything else
/// through the movie branch.
pub fn gather_kind_for(art_type: &str) -> GatherKind {
    match art_type {
        "tvshow" | "tvshow_season" | "tvshow_episode" => GatherKind::TvShow,
        _ => GatherKind::Movie,
    }
}

fn art_urls(metadata: &GatheredMetadata, art_type: &str) -> Vec<(ArtRole, String)> {
    let slots = match art_type {
        "tvshow" => [
            (ArtRole::ShowPoster, &metadata.tvshow_art),
            (ArtRole::ShowBackground, &metadata.tvshow_background_art),
        ],
        "tvshow_season" => [
            (ArtRole::SeasonPoster, &metadata.tvshow_season_art),
            (ArtRole::ShowPoster, &metadata.tvshow_art),
        ],
        _ => [
            (ArtRole::Poster, &metadata.art),
            (ArtRole::Background, &metadata.background_art),
        ],
    };

    slots
        .into_iter()
        .filter_map(|(role, url)| url.clone().map(|url| (role, url)))
        .collect()
}
