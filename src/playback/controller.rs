use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::audio::AudioEngine;
use crate::config::PlaybackSettings;
use crate::error::{PlayerError, Result};
use crate::library::TrackRef;
use crate::playlist::{self, MIN_TRACKS, Playlist};

use super::select::next_index;
use super::types::{Direction, PlaybackState, SelectionPolicy};

pub const MIN_VOLUME: f64 = 0.0;
pub const MAX_VOLUME: f64 = 10.0;
/// Maps the 0-10 volume scale onto the engine's 0.0-1.0 gain.
const VOLUME_SCALE: f64 = 0.1;

const NO_TRACK_TEXT: &str = "*** NONE ***";
const NO_SOURCE_TEXT: &str = "Select folder to load";

/// Owns the current playlist and transport state, and drives the engine.
///
/// Invariants:
/// - `current` is a valid index whenever the playlist is non-empty;
/// - an empty playlist forces `Stopped`;
/// - `Paused` is only entered from `Playing`.
pub struct PlaybackController<E: AudioEngine> {
    engine: E,
    playlist: Playlist,
    current: usize,
    state: PlaybackState,
    volume: f64,
    policy: SelectionPolicy,
    /// Set after a successful `load`, cleared by `clear`.
    track_loaded: bool,
    /// Folder or store the playlist came from, for display.
    source: Option<PathBuf>,
    rng: StdRng,
}

impl<E: AudioEngine> PlaybackController<E> {
    pub fn new(engine: E, settings: &PlaybackSettings) -> Self {
        Self::with_rng(engine, settings, StdRng::from_entropy())
    }

    fn with_rng(engine: E, settings: &PlaybackSettings, rng: StdRng) -> Self {
        let mut controller = Self {
            engine,
            playlist: Playlist::default(),
            current: 0,
            state: PlaybackState::Stopped,
            volume: MIN_VOLUME,
            policy: settings.policy.into(),
            track_loaded: false,
            source: None,
            rng,
        };
        controller.set_volume(settings.volume);
        controller
    }

    #[cfg(test)]
    pub(crate) fn with_seed(engine: E, settings: &PlaybackSettings, seed: u64) -> Self {
        Self::with_rng(engine, settings, StdRng::seed_from_u64(seed))
    }

    /// Replace the playlist and load its first track, leaving playback stopped.
    ///
    /// The first track is loaded before anything is replaced, so a load
    /// failure leaves the previous playlist in place.
    pub fn install(&mut self, playlist: Playlist) -> Result<()> {
        let first = playlist.get(0).ok_or(PlayerError::InsufficientTracks {
            found: playlist.len(),
        })?;
        self.engine.load(&first.path())?;

        info!(tracks = playlist.len(), first = %first, "playlist installed");
        self.playlist = playlist;
        self.current = 0;
        self.track_loaded = true;
        self.state = PlaybackState::Stopped;
        Ok(())
    }

    /// Scan `dir` and install the result. On failure nothing changes.
    pub fn open_folder(&mut self, dir: &Path, extension: &str) -> Result<()> {
        let playlist = Playlist::from_directory(dir, extension)?;
        self.install(playlist)?;
        self.source = Some(dir.to_path_buf());
        self.stop();
        Ok(())
    }

    /// Read the store at `path` and install it. On failure nothing changes.
    pub fn open_store(&mut self, path: &Path) -> Result<()> {
        let playlist = playlist::read_store(path)?;
        self.install(playlist)?;
        self.source = Some(path.to_path_buf());
        self.stop();
        Ok(())
    }

    /// Write the installed playlist to `path`.
    pub fn save_store(&self, path: &Path) -> Result<()> {
        if self.playlist.len() < MIN_TRACKS {
            return Err(PlayerError::InsufficientTracks {
                found: self.playlist.len(),
            });
        }
        playlist::write_store(path, &self.playlist)?;
        info!(path = ?path, tracks = self.playlist.len(), "playlist saved");
        Ok(())
    }

    /// Resume if paused, pause if the engine is producing audio, otherwise
    /// start the loaded track. Returns the new state.
    pub fn toggle_pause_play(&mut self) -> Result<PlaybackState> {
        if !self.track_loaded {
            return Err(PlayerError::NoTrackLoaded);
        }

        if self.state == PlaybackState::Paused {
            self.engine.unpause();
            self.state = PlaybackState::Playing;
        } else if self.engine.is_busy() {
            self.engine.pause();
            self.state = PlaybackState::Paused;
        } else {
            self.engine.play();
            self.state = PlaybackState::Playing;
        }

        debug!(state = %self.state, "toggled playback");
        Ok(self.state)
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.state = PlaybackState::Stopped;
        debug!("playback stopped");
    }

    /// Load the next or previous track per the selection policy. Playback
    /// continues on the new track unless the player is stopped.
    ///
    /// The index only moves once the engine accepted the new track.
    pub fn advance(&mut self, direction: Direction) -> Result<usize> {
        if self.playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }

        let index = next_index(
            self.policy,
            direction,
            self.current,
            self.playlist.len(),
            &mut self.rng,
        );
        let track = self
            .playlist
            .get(index)
            .ok_or(PlayerError::EmptyPlaylist)?;
        if let Err(e) = self.engine.load(&track.path()) {
            warn!(track = %track, error = %e, "cannot load track");
            return Err(e.into());
        }

        self.current = index;
        self.track_loaded = true;
        if self.state != PlaybackState::Stopped {
            self.engine.play();
            self.state = PlaybackState::Playing;
        }

        debug!(?direction, index, state = %self.state, "advanced");
        Ok(index)
    }

    /// Set the volume on the 0-10 scale. Out-of-range levels are clamped.
    pub fn set_volume(&mut self, level: f64) {
        self.volume = level.clamp(MIN_VOLUME, MAX_VOLUME);
        self.engine.set_volume((self.volume * VOLUME_SCALE) as f32);
    }

    /// Takes effect on the next `advance`.
    pub fn set_selection_policy(&mut self, policy: SelectionPolicy) {
        self.policy = policy;
    }

    /// Unload the engine and drop the playlist.
    pub fn clear(&mut self) {
        self.engine.unload();
        self.playlist.clear();
        self.current = 0;
        self.track_loaded = false;
        self.source = None;
        self.state = PlaybackState::Stopped;
        info!("playlist cleared");
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Volume on the 0-10 scale.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.playlist.is_empty()).then_some(self.current)
    }

    pub fn current_track(&self) -> Option<&TrackRef> {
        self.current_index().and_then(|i| self.playlist.get(i))
    }

    /// Display name of the current track.
    pub fn now_playing(&self) -> String {
        self.current_track()
            .map(|t| t.filename().to_string())
            .unwrap_or_else(|| NO_TRACK_TEXT.to_string())
    }

    /// Display path of the folder or store the playlist came from.
    pub fn source_display(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| NO_SOURCE_TEXT.to_string())
    }

    pub fn is_engine_busy(&self) -> bool {
        self.engine.is_busy()
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
