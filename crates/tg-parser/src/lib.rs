//! tg-parser: release-name parser for media filenames.
//!
//! Extracts the searchable parts of scene/P2P style file names: the title,
//! the year and the season/episode numbers.
//!
//! # Quick start
//!
//! ```
//! use tg_parser::parse;
//!
//! let r = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
//! assert_eq!(r.title, "The Matrix");
//! assert_eq!(r.year, Some(1999));
//! assert_eq!(r.group.as_deref(), Some("GROUP"));
//! ```

pub mod tokenizer;
pub mod types;
mod parser;

pub use types::ParsedRelease;

/// Parse a release name into structured metadata.
///
/// A trailing container extension is ignored. Everything in front of the
/// first year, episode tag or release keyword becomes the title.
///
/// # Examples
///
/// ```
/// let r = tg_parser::parse("Show.Name.S02E05.mkv");
/// assert_eq!(r.title, "Show Name");
/// assert_eq!(r.season, Some(2));
/// assert_eq!(r.episode, Some(5));
/// ```
pub fn parse(input: &str) -> ParsedRelease {
    parser::parse(input)
}
