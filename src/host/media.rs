use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A media type the host may ask metadata for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GatherKind {
    Movie,
    TvShow,
    /// Anything the host knows about but this plugin does not handle.
    Other(String),
}

impl From<&str> for GatherKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" => GatherKind::Movie,
            "tvshow" => GatherKind::TvShow,
            other => GatherKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatherKind::Movie => f.write_str("movie"),
            GatherKind::TvShow => f.write_str("tvshow"),
            GatherKind::Other(name) => f.write_str(name),
        }
    }
}

/// The set of media types requested for a single lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatherTypes(BTreeSet<GatherKind>);

impl GatherTypes {
    pub fn new<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<GatherKind>,
    {
        Self(kinds.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, kind: &GatherKind) -> bool {
        self.0.contains(kind)
    }

    pub fn has_movie(&self) -> bool {
        self.contains(&GatherKind::Movie)
    }

    pub fn has_tvshow(&self) -> bool {
        self.contains(&GatherKind::TvShow)
    }

    /// True when at least one of `movie` / `tvshow` is present.
    pub fn is_supported(&self) -> bool {
        self.has_movie() || self.has_tvshow()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GatherKind> {
        self.0.iter()
    }
}

impl FromIterator<GatherKind> for GatherTypes {
    fn from_iter<T: IntoIterator<Item = GatherKind>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What the host already knows about the file being enriched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub file: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub tvshow_season: Option<u32>,
    #[serde(default)]
    pub tvshow_episode: Option<u32>,
}

impl MediaInfo {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_original_name(mut self, name: impl Into<String>) -> Self {
        self.original_name = Some(name.into());
        self
    }

    pub fn with_season(mut self, season: u32) -> Self {
        self.tvshow_season = Some(season);
        self
    }

    pub fn with_episode(mut self, episode: u32) -> Self {
        self.tvshow_episode = Some(episode);
        self
    }

    /// Title to compare search results against: `original_name`, then
    /// `title`, ignoring blanks.
    pub fn preferred_title(&self) -> Option<&str> {
        [self.original_name.as_deref(), self.title.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
    }
}

/// Outcome of filename parsing, as consumed by the gatherer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub title: String,
    pub year: Option<i32>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}
