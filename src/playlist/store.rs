//! Playlist persistence.
//!
//! The store is a TOML document holding one `[[tracks]]` table per entry,
//! in playback order:
//!
//! ```toml
//! [[tracks]]
//! directory = "/music/album"
//! filename = "01 intro.mp3"
//! ```

use std::fs;
use std::path::Path;

use crate::error::{PlayerError, Result};

use super::model::Playlist;

/// Stores this size or smaller are treated as empty and never parsed.
const EMPTY_STORE_BYTES: usize = 1;

impl Playlist {
    /// Decode a store produced by [`Playlist::to_store`].
    pub fn from_store(bytes: &[u8]) -> Result<Self> {
        if bytes.len() <= EMPTY_STORE_BYTES {
            return Err(PlayerError::InsufficientTracks { found: 0 });
        }

        let text = std::str::from_utf8(bytes)
            .map_err(|e| PlayerError::InvalidStoreFormat(e.to_string()))?;
        let decoded: Playlist =
            toml::from_str(text).map_err(|e| PlayerError::InvalidStoreFormat(e.to_string()))?;

        Self::from_tracks(decoded.tracks().to_vec())
    }

    /// Encode the ordered track sequence.
    pub fn to_store(&self) -> Result<Vec<u8>> {
        Ok(toml::to_string(self)?.into_bytes())
    }
}

/// Read and decode the store at `path`.
pub fn read_store(path: &Path) -> Result<Playlist> {
    let bytes = fs::read(path)?;
    Playlist::from_store(&bytes)
}

/// Encode `playlist` and write it to `path`, replacing any existing file.
pub fn write_store(path: &Path, playlist: &Playlist) -> Result<()> {
    let bytes = playlist.to_store()?;
    fs::write(path, bytes)?;
    Ok(())
}
