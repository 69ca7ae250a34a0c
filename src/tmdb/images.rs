//! Artwork URL construction.

use super::models::ImagesConfiguration;

/// Used when `/configuration` reports no image base at all.
const FALLBACK_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Turns a TMDB image path fragment (`/abc.jpg`) into a full URL.
pub trait ImageUrlBuilder: Send + Sync {
    fn image_url(&self, path: &str) -> String;

    /// URL for an optional path. Missing and blank paths yield `None`.
    fn art_url(&self, path: Option<&str>) -> Option<String> {
        path.map(str::trim)
            .filter(|p| !p.trim_start_matches('/').is_empty())
            .map(|p| self.image_url(p))
    }
}

/// [`ImageUrlBuilder`] driven by the remote `/configuration` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHelper {
    base_url: String,
    size: String,
}

impl ImageHelper {
    /// Prefer the HTTPS base, fall back to the plain one, then to the
    /// well-known TMDB image host.
    pub fn new(images: &ImagesConfiguration, size: &str) -> Self {
        let base = [&images.secure_base_url, &images.base_url]
            .into_iter()
            .map(|b| b.trim())
            .find(|b| !b.is_empty())
            .unwrap_or(FALLBACK_IMAGE_BASE);

        let mut base_url = base.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            base_url,
            size: size.trim_matches('/').to_string(),
        }
    }
}

impl ImageUrlBuilder for ImageHelper {
    fn image_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{}/{}", self.base_url, self.size, path)
    }
}
