//! Output types for the release name parser.

use serde::{Deserialize, Serialize};

/// Structured data extracted from a media release filename.
///
/// Fields are populated on a best-effort basis. `title` may be empty when the
/// name carries nothing but keywords; every other field is `None` when the
/// corresponding token is not found.
///
/// # Examples
///
/// ```
/// use tg_parser::parse;
///
/// let r = parse("Show.Name.S02E05.720p.HDTV-GRP");
/// assert_eq!(r.title, "Show Name");
/// assert_eq!(r.season, Some(2));
/// assert_eq!(r.episode, Some(5));
/// assert_eq!(r.group.as_deref(), Some("GRP"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedRelease {
    /// The cleaned title (separators replaced with spaces, trimmed).
    pub title: String,

    /// Release year (1900--2099).
    pub year: Option<u32>,

    /// Season number (from `S01E01` or `1x01` tags).
    pub season: Option<u32>,

    /// Episode number (first episode for multi-episode releases).
    pub episode: Option<u32>,

    /// Last episode of a multi-episode release (`S01E01E02` → 2).
    pub episode_end: Option<u32>,

    /// Release group (the text after the final hyphen).
    pub group: Option<String>,
}

impl ParsedRelease {
    /// Create a new `ParsedRelease` with only the title populated.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Whether an episode marker was found.
    pub fn is_episode(&self) -> bool {
        self.season.is_some() && self.episode.is_some()
    }
}
