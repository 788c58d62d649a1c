//! [`AudioEngine`] on top of a `rodio` output stream.
//!
//! Each loaded track gets its own paused `Sink`. Playing a track that has
//! already been started (or stopped) rebuilds the sink so playback restarts
//! from the beginning.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, StreamError};
use tracing::warn;

use crate::error::LoadError;

use super::engine::AudioEngine;

pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    started: bool,
    volume: f32,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which would land
        // on top of the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            started: false,
            volume: 1.0,
        })
    }

    /// Create a paused `Sink` holding the decoded `path`.
    fn create_sink(&self, path: &Path) -> Result<Sink, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        Ok(sink)
    }

    fn replace_sink(&mut self, sink: Option<Sink>) {
        if let Some(old) = std::mem::replace(&mut self.sink, sink) {
            old.stop();
        }
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let sink = self.create_sink(path)?;
        self.replace_sink(Some(sink));
        self.loaded = Some(path.to_path_buf());
        self.started = false;
        Ok(())
    }

    fn play(&mut self) {
        let Some(path) = self.loaded.clone() else {
            return;
        };

        if self.started || self.sink.is_none() {
            match self.create_sink(&path) {
                Ok(sink) => self.replace_sink(Some(sink)),
                Err(e) => {
                    warn!(error = %e, "cannot restart track");
                    self.replace_sink(None);
                    return;
                }
            }
        }

        if let Some(sink) = &self.sink {
            sink.play();
            self.started = true;
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        self.replace_sink(None);
        self.started = false;
    }

    fn unload(&mut self) {
        self.stop();
        self.loaded = None;
    }

    fn is_busy(&self) -> bool {
        self.started
            && self
                .sink
                .as_ref()
                .is_some_and(|s| !s.is_paused() && !s.empty())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }
}
