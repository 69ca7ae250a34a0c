//! Choosing one search result out of many.

use chrono::Datelike;

use super::dates::parse_day;
use crate::config::MatchPolicy;
use crate::tmdb::{MovieSearchResult, TvSearchResult};

/// A search hit that can be compared against a wanted title and year.
pub trait SearchCandidate {
    fn display_title(&self) -> Option<&str>;
    fn original_title(&self) -> Option<&str>;
    fn year(&self) -> Option<i32>;
}

impl SearchCandidate for MovieSearchResult {
    fn display_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn original_title(&self) -> Option<&str> {
        self.original_title.as_deref()
    }

    fn year(&self) -> Option<i32> {
        parse_day(self.release_date.as_deref()).map(|d| d.year())
    }
}

impl SearchCandidate for TvSearchResult {
    fn display_title(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn original_title(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    fn year(&self) -> Option<i32> {
        parse_day(self.first_air_date.as_deref()).map(|d| d.year())
    }
}

/// Pick the result whose display and original titles both equal `title`
/// (ignoring case). Among several, prefer the one released in `year`.
/// Falls back to the first result when no title matches.
pub fn best_match<'a, T: SearchCandidate>(
    results: &'a [T],
    title: &str,
    year: Option<i32>,
) -> Option<&'a T> {
    let wanted = title.trim().to_uppercase();
    let same = |candidate: Option<&str>| {
        candidate.is_some_and(|c| c.trim().to_uppercase() == wanted)
    };

    let titled: Vec<&T> = results
        .iter()
        .filter(|r| same(r.display_title()) && same(r.original_title()))
        .collect();

    if titled.len() > 1 {
        if let Some(year) = year {
            if let Some(hit) = titled.iter().find(|r| r.year() == Some(year)) {
                return Some(*hit);
            }
        }
    }

    titled.first().copied().or_else(|| results.first())
}

/// Match policy plus the inputs it compares against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Selection<'a> {
    pub policy: MatchPolicy,
    pub preferred_title: Option<&'a str>,
    pub year: Option<i32>,
}

impl Selection<'_> {
    /// `searched` is the query that produced `results`; it is the
    /// comparison target when no preferred title is known.
    pub fn pick<'r, T: SearchCandidate>(&self, results: &'r [T], searched: &str) -> Option<&'r T> {
        match self.policy {
            MatchPolicy::First => results.first(),
            MatchPolicy::BestTitle => {
                best_match(results, self.preferred_title.unwrap_or(searched), self.year)
            }
        }
    }
}
