//! Host-facing capabilities.
//!
//! The gatherer runs inside a media server and only touches it through
//! these traits: preferences, filename parsing and art aggregation.

mod art;
mod filename;
mod media;
mod prefs;

pub use art::{
    gather_kind_for, ArtAggregator, ArtCandidate, ArtRole, MetadataArtAggregator, MetadataSource,
};
pub use filename::{FilenameParser, SceneFilenameParser};
pub use media::{GatherKind, GatherTypes, MediaInfo, ReleaseInfo};
pub use prefs::{MemoryPreferences, PreferenceDef, PreferenceKind, PreferenceStore};
