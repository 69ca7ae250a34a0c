use chrono::Datelike;
use tracing::debug;

use super::dates::{parse_day, timestamp};
use super::genres::extract_genres;
use super::matching::Selection;
use super::result::GatheredMetadata;
use super::PLUGIN_ID;
use crate::error::Result;
use crate::tmdb::{ImageUrlBuilder, TmdbApi};

/// Search by the seeded title, then map the chosen movie's detail onto
/// `metadata`. Returns whether a movie was matched.
pub(crate) async fn resolve_movie(
    api: &dyn TmdbApi,
    images: &dyn ImageUrlBuilder,
    selection: &Selection<'_>,
    metadata: &mut GatheredMetadata,
) -> Result<bool> {
    let Some(title) = metadata.title.clone().filter(|t| !t.trim().is_empty()) else {
        return Ok(false);
    };

    let results = api.search_movies(&title).await?;
    let Some(chosen) = selection.pick(&results, &title) else {
        debug!(plugin = PLUGIN_ID, title = %title, "No movie found");
        return Ok(false);
    };

    metadata.tmdb_id = Some(chosen.id);
    let movie = api.movie(chosen.id).await?;
    debug!(plugin = PLUGIN_ID, tmdb_id = movie.id, "Movie matched");

    if let Some(imdb_id) = movie.imdb_id.filter(|id| !id.is_empty()) {
        metadata.imdb_id = Some(imdb_id);
    }
    if let Some(original) = movie.original_title {
        metadata.original_name = Some(original);
    }
    if let Some(day) = parse_day(movie.release_date.as_deref()) {
        metadata.release_date = timestamp(day);
        metadata.year = Some(day.year());
    }
    if let Some(url) = images.art_url(movie.poster_path.as_deref()) {
        metadata.art = Some(url);
    }
    if let Some(url) = images.art_url(movie.backdrop_path.as_deref()) {
        metadata.background_art = Some(url);
    }
    metadata.genre = Some(extract_genres(movie.genres.as_deref()));

    Ok(true)
}
