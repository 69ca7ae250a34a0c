use crate::tmdb::Genre;

/// Ordered, non-empty genre names.
pub fn extract_genres(genres: Option<&[Genre]>) -> Vec<String> {
    genres
        .unwrap_or_default()
        .iter()
        .filter_map(|g| g.name.as_deref())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
