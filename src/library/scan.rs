use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::model::TrackRef;

/// `true` when `name` ends with the literal `extension` (case-sensitive).
fn has_audio_suffix(name: &str, extension: &str) -> bool {
    !extension.is_empty() && name.ends_with(extension)
}

/// List the playable files directly inside `dir`.
///
/// Only the top level is visited and entries come back in filesystem
/// enumeration order; callers must not assume they are sorted. Directories
/// and names that are not valid UTF-8 are skipped; a `dir` that is not
/// valid UTF-8 yields nothing.
pub fn scan(dir: &Path, extension: &str) -> Vec<TrackRef> {
    let Some(directory) = dir.to_str().map(str::to_string) else {
        debug!(path = ?dir, "skipping non UTF-8 directory");
        return Vec::new();
    };

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| match entry.file_name().to_str() {
            Some(name) => Some(name.to_string()),
            None => {
                debug!(path = ?entry.path(), "skipping non UTF-8 file name");
                None
            }
        })
        .filter(|name| has_audio_suffix(name, extension))
        .map(|name| TrackRef::new(directory.clone(), name))
        .collect()
}
