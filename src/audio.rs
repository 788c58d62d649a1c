//! Audio output boundary.
//!
//! The player only ever talks to an [`AudioEngine`]; decoding, buffering and
//! device I/O live behind it. [`RodioEngine`] is the real implementation.

mod engine;
mod rodio_engine;

#[cfg(test)]
pub(crate) mod fake;

pub use engine::AudioEngine;
pub use rodio_engine::RodioEngine;
