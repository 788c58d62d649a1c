//! Track identity and directory scanning.
//!
//! A track is identified purely by the directory it lives in and its file
//! name; no tags are read.

mod model;
mod scan;

pub use model::TrackRef;
pub use scan::scan;
