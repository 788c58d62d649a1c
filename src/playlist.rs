//! Ordered track lists: building them from a folder or a saved store, and
//! writing them back out.
//!
//! A playlist accepted for playback always holds at least [`MIN_TRACKS`]
//! entries; loaders reject anything smaller before it reaches the player.

mod model;
mod store;

pub use model::{MIN_TRACKS, Playlist};
pub use store::{read_store, write_store};
