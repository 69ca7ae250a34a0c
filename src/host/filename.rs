use std::path::Path;

use super::media::{GatherTypes, ReleaseInfo};

/// Host-supplied filename parsing.
pub trait FilenameParser: Send + Sync {
    /// Extract a release description from `file`, or `None` when nothing
    /// usable could be recognised.
    fn parse(&self, file: &Path, types: &GatherTypes) -> Option<ReleaseInfo>;
}

/// [`FilenameParser`] backed by the scene-release tokenizer in `tg-parser`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneFilenameParser;

impl FilenameParser for SceneFilenameParser {
    fn parse(&self, file: &Path, types: &GatherTypes) -> Option<ReleaseInfo> {
        // file_stem would eat ".S02E05" from extension-less names; the
        // parser strips known containers itself.
        let name = file.file_name()?.to_string_lossy();
        let parsed = tg_parser::parse(&name);

        let title = parsed.title.trim().to_string();
        if title.is_empty() {
            return None;
        }

        let year = parsed.year.and_then(|y| i32::try_from(y).ok());
        // Episode markers are meaningless for a movie-only lookup.
        let (season, episode) = if types.has_tvshow() {
            (parsed.season, parsed.episode)
        } else {
            (None, None)
        };

        Some(ReleaseInfo {
            title,
            year,
            season,
            episode,
        })
    }
}
