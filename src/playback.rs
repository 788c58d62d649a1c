//! Playback state machine, track navigation and end-of-track detection.
//!
//! [`PlaybackController`] owns the installed playlist, the current index,
//! the transport state and the volume, and drives an
//! [`AudioEngine`](crate::audio::AudioEngine). [`EndOfTrackPoller`] checks
//! on a fixed period whether the engine went idle by itself and advances.

mod controller;
mod poller;
mod select;
mod types;

pub use controller::PlaybackController;
pub use poller::EndOfTrackPoller;
pub use types::{Direction, PlaybackState, SelectionPolicy};
