use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, Result};
use crate::library::{self, TrackRef};

/// Smallest playlist the loaders will hand to the player.
pub const MIN_TRACKS: usize = 2;

/// An ordered, mutable sequence of tracks. Insertion order is playback order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    tracks: Vec<TrackRef>,
}

impl Playlist {
    /// Build a playlist from `tracks`, enforcing the minimum size.
    pub fn from_tracks(tracks: Vec<TrackRef>) -> Result<Self> {
        if tracks.len() < MIN_TRACKS {
            return Err(PlayerError::InsufficientTracks {
                found: tracks.len(),
            });
        }
        Ok(Self { tracks })
    }

    /// Scan `dir` (non-recursively) for files ending in `extension`.
    ///
    /// `dir` must be valid UTF-8, since tracks store their directory as text.
    pub fn from_directory(dir: &Path, extension: &str) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PlayerError::NotADirectory(dir.to_path_buf()));
        }
        if dir.to_str().is_none() {
            return Err(PlayerError::InvalidPath(dir.to_path_buf()));
        }
        Self::from_tracks(library::scan(dir, extension))
    }

    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&TrackRef> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Empty the playlist in place.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
