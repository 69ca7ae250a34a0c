use chrono::Datelike;
use tracing::debug;

use super::dates::{parse_day, timestamp};
use super::genres::extract_genres;
use super::matching::Selection;
use super::result::GatheredMetadata;
use super::PLUGIN_ID;
use crate::error::Result;
use crate::host::MediaInfo;
use crate::tmdb::{ImageUrlBuilder, TmdbApi};

/// Show, then season, then episode. Each stage only runs when the previous
/// one found something; a miss keeps whatever was set so far. Returns
/// whether the show itself was matched.
pub(crate) async fn resolve_tv(
    api: &dyn TmdbApi,
    images: &dyn ImageUrlBuilder,
    selection: &Selection<'_>,
    media: &MediaInfo,
    metadata: &mut GatheredMetadata,
) -> Result<bool> {
    let Some(show_name) = metadata.tvshow.clone().filter(|n| !n.is_empty()) else {
        return Ok(false);
    };

    let results = api.search_tv(&show_name).await?;
    let Some(chosen) = selection.pick(&results, &show_name) else {
        debug!(plugin = PLUGIN_ID, show = %show_name, "No TV show found");
        return Ok(false);
    };

    let show_id = chosen.id;
    metadata.tmdb_tvshow_id = Some(show_id);

    let show = api.tv_show(show_id).await?;
    debug!(plugin = PLUGIN_ID, tmdb_tvshow_id = show_id, "TV show matched");

    if let Some(name) = show.original_name {
        metadata.tvshow = Some(name);
    }
    if let Some(day) = parse_day(show.first_air_date.as_deref()) {
        metadata.tvshow_year = Some(day.year());
    }
    if let Some(url) = images.art_url(show.poster_path.as_deref()) {
        metadata.tvshow_art = Some(url);
    }
    if let Some(url) = images.art_url(show.backdrop_path.as_deref()) {
        metadata.tvshow_background_art = Some(url);
    }
    metadata.genre = Some(extract_genres(show.genres.as_deref()));

    let Some(season_number) = metadata.tvshow_season.or(media.tvshow_season) else {
        return Ok(true);
    };

    let Some(season) = api
        .season(show_id, season_number)
        .await?
        .filter(|s| s.id.is_some())
    else {
        debug!(plugin = PLUGIN_ID, season = season_number, "Season not found");
        return Ok(true);
    };

    if let Some(url) = images.art_url(season.poster_path.as_deref()) {
        metadata.tvshow_season_art = Some(url);
    }

    // Episode lookups are only wanted when the host itself knows the file
    // is an episode.
    let Some(known_episode) = media.tvshow_episode else {
        return Ok(true);
    };
    let episode_number = metadata.tvshow_episode.unwrap_or(known_episode);

    let Some((episode_id, episode)) = api
        .episode(show_id, season_number, episode_number)
        .await?
        .and_then(|e| e.id.map(|id| (id, e)))
    else {
        debug!(
            plugin = PLUGIN_ID,
            season = season_number,
            episode = episode_number,
            "Episode not found"
        );
        return Ok(true);
    };

    metadata.tmdb_id = Some(episode_id);
    if let Some(number) = episode.season_number {
        metadata.tvshow_season = Some(number);
    }
    if let Some(number) = episode.episode_number {
        metadata.tvshow_episode = Some(number);
    }
    if let Some(name) = episode.name {
        metadata.original_name = Some(name);
    }
    if let Some(day) = parse_day(episode.air_date.as_deref()) {
        metadata.release_date = timestamp(day);
        metadata.year = Some(day.year());
    }
    if let Some(overview) = episode.overview {
        metadata.description = Some(overview);
    }
    if let Some(url) = images.art_url(episode.still_path.as_deref()) {
        metadata.art = Some(url);
    }

    Ok(true)
}
