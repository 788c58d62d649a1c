use std::path::Path;

use crate::error::LoadError;

/// Playback capability driven by the player.
///
/// Loading a new track replaces whatever was loaded or playing before.
pub trait AudioEngine {
    /// Open and prepare `path` without starting it.
    fn load(&mut self, path: &Path) -> Result<(), LoadError>;
    /// Start the loaded track from the beginning.
    fn play(&mut self);
    fn pause(&mut self);
    fn unpause(&mut self);
    fn stop(&mut self);
    /// Stop and forget the loaded track.
    fn unload(&mut self);
    /// `true` while audio is actually being produced (not paused, not finished).
    fn is_busy(&self) -> bool;
    /// Output gain in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
}
