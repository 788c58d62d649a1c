//! Error types shared by the playlist loaders, the playback controller and
//! the audio engine boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by an [`AudioEngine`](crate::audio::AudioEngine) when a
/// track cannot be opened or decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Player errors. None of these are fatal: the failing operation simply does
/// not take effect.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A directory scan or store yielded fewer tracks than a playlist needs.
    #[error("a playlist needs at least 2 tracks, found {found}")]
    InsufficientTracks { found: usize },

    /// Store bytes did not parse as a track sequence.
    #[error("invalid playlist store: {0}")]
    InvalidStoreFormat(String),

    /// Transport command issued before any track was loaded.
    #[error("no track loaded")]
    NoTrackLoaded,

    /// Navigation attempted without an installed playlist.
    #[error("playlist is empty")]
    EmptyPlaylist,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// Path that cannot be stored in a playlist (not valid UTF-8).
    #[error("path is not valid UTF-8: {0:?}")]
    InvalidPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode playlist store: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Result type for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
