//! Core parsing logic for media release filenames.
//!
//! The parser operates in three phases:
//! 1. Tokenize the input using the Logos lexer.
//! 2. Identify the release group and the year/season/episode markers.
//! 3. Cut the title from the raw input in front of the first marker.

use crate::tokenizer::{tokenize, SpannedToken, Token};
use crate::types::ParsedRelease;

/// File extensions stripped before tokenizing.
const CONTAINER_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "m2ts", "mov", "wmv", "mpg", "mpeg", "webm",
];

/// Parse a release name string into a [`ParsedRelease`].
pub fn parse(input: &str) -> ParsedRelease {
    let input = strip_extension(input.trim());
    let tokens = tokenize(input);

    if tokens.is_empty() {
        return ParsedRelease::new(clean_title(input));
    }

    let mut release = ParsedRelease::default();

    // Phase 1: release group, which also bounds the title.
    let group_idx = extract_group(&tokens, &mut release);

    // Phase 2: year and episode markers.
    extract_markers(&tokens, &mut release);

    // Phase 3: title.
    extract_title(&tokens, input, group_idx, &mut release);

    release
}

// -------------------------------------------------------------------------
// Release group extraction
// -------------------------------------------------------------------------

/// Find the release group: the word after the last hyphen, provided nothing
/// but separators follows it and some release metadata precedes it.
///
/// The second condition keeps hyphenated titles such as `Spider-Man` intact.
/// Returns the index of the hyphen token.
fn extract_group(tokens: &[SpannedToken<'_>], release: &mut ParsedRelease) -> Option<usize> {
    let idx = tokens
        .iter()
        .rposition(|t| matches!(t.token, Token::Hyphen))?;

    let candidate = tokens.get(idx + 1)?;
    let Token::Word(name) = &candidate.token else {
        return None;
    };
    // "Show - S01E02 - Pilot" is an episode title, not "-GROUP".
    if candidate.span.start != tokens[idx].span.end {
        return None;
    }

    let trailing = tokens[idx + 2..]
        .iter()
        .any(|t| !matches!(t.token, Token::Dot | Token::Underscore));
    if trailing {
        return None;
    }

    if !tokens[..idx].iter().any(|t| is_title_stop(&t.token)) {
        return None;
    }

    release.group = Some(name.to_string());
    Some(idx)
}

// -------------------------------------------------------------------------
// Year / episode markers
// -------------------------------------------------------------------------

/// Record the first year and the first season/episode tag.
fn extract_markers(tokens: &[SpannedToken<'_>], release: &mut ParsedRelease) {
    for st in tokens {
        match &st.token {
            Token::Year(text) => {
                if release.year.is_none() {
                    release.year = text.parse().ok();
                }
            }
            Token::SeasonEpisode(text) => {
                if release.season.is_none() {
                    parse_season_episode(text, release);
                }
            }
            Token::CrossEpisode(text) => {
                if release.season.is_none() {
                    parse_cross_episode(text, release);
                }
            }
            _ => {}
        }
    }
}

/// Parse a tag like `S01E01` or `S02E03E04` into season, episode and
/// optional episode_end.
fn parse_season_episode(text: &str, release: &mut ParsedRelease) {
    let upper = text.to_uppercase();
    let after_s = &upper[1..];
    let Some(e_pos) = after_s.find('E') else {
        return;
    };

    release.season = after_s[..e_pos].parse().ok();

    let episodes: Vec<u32> = after_s[e_pos..]
        .split('E')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    release.episode = episodes.first().copied();
    if episodes.len() > 1 {
        release.episode_end = episodes.last().copied();
    }
}

/// Parse a tag like `2x05` into season and episode.
fn parse_cross_episode(text: &str, release: &mut ParsedRelease) {
    let lower = text.to_ascii_lowercase();
    if let Some((season, episode)) = lower.split_once('x') {
        release.season = season.parse().ok();
        release.episode = episode.parse().ok();
    }
}

// -------------------------------------------------------------------------
// Title extraction
// -------------------------------------------------------------------------

/// Cut the title out of `input` up to the first stop token (or the group
/// hyphen). Working on the raw slice keeps non-ASCII letters and inner
/// hyphens that the lexer does not tokenize as words.
fn extract_title(
    tokens: &[SpannedToken<'_>],
    input: &str,
    group_idx: Option<usize>,
    release: &mut ParsedRelease,
) {
    let stop_idx = tokens.iter().position(|st| is_title_stop(&st.token));
    let end = match (stop_idx, group_idx) {
        (Some(stop), Some(group)) => stop.min(group),
        (stop, group) => stop.or(group).unwrap_or(tokens.len()),
    };

    // A leading year with nothing before it is the title ("1917.mkv",
    // "2012.2009.1080p"). The release year is the next one, if any.
    if end == 0 {
        if let Token::Year(text) = &tokens[0].token {
            release.title = text.to_string();
            release.year = tokens[1..].iter().find_map(|t| match &t.token {
                Token::Year(y) => y.parse().ok(),
                _ => None,
            });
            return;
        }
    }

    let byte_end = tokens.get(end).map_or(input.len(), |t| t.span.start);
    release.title = clean_title(&input[..byte_end]);
}

// -------------------------------------------------------------------------
// Helpers
// -------------------------------------------------------------------------

/// Drop a trailing container extension (`.mkv`, `.mp4`, ...).
fn strip_extension(input: &str) -> &str {
    match input.rsplit_once('.') {
        Some((stem, ext))
            if CONTAINER_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext)) =>
        {
            stem
        }
        _ => input,
    }
}

/// Replace dots and underscores with spaces, collapse whitespace and trim
/// dangling separators.
fn clean_title(raw: &str) -> String {
    raw.replace(|c: char| c == '.' || c == '_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}

/// Whether a token ends the title.
fn is_title_stop(token: &Token) -> bool {
    matches!(
        token,
        Token::Year(_)
            | Token::SeasonEpisode(_)
            | Token::CrossEpisode(_)
            | Token::Resolution(_)
            | Token::Keyword(_)
    )
}
