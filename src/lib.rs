//! tmdb-gatherer - TMDB metadata plugin for media servers
//!
//! Given a video file and the media types the host wants, the gatherer
//! parses the filename, queries The Movie Database and returns normalized
//! metadata. The library crate exposes everything the CLI and the
//! integration tests drive.

pub mod config;
pub mod error;
pub mod gatherer;
pub mod host;
pub mod tmdb;

pub use error::{Error, Result};
pub use gatherer::{GatherOutcome, GatheredMetadata, SkipReason, TmdbGatherer};
