//! Recording [`AudioEngine`] used by tests.

use std::path::{Path, PathBuf};

use crate::error::LoadError;

use super::engine::AudioEngine;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(PathBuf),
    Play,
    Pause,
    Unpause,
    Stop,
    Unload,
    SetVolume(f32),
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: Vec<EngineCall>,
    pub busy: bool,
    /// Paths whose `load` fails.
    pub failing: Vec<PathBuf>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, excluding volume changes.
    pub fn transport_calls(&self) -> Vec<EngineCall> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, EngineCall::SetVolume(_)))
            .cloned()
            .collect()
    }

    pub fn last_loaded(&self) -> Option<&Path> {
        self.calls.iter().rev().find_map(|c| match c {
            EngineCall::Load(p) => Some(p.as_path()),
            _ => None,
        })
    }
}

impl AudioEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        if self.failing.iter().any(|p| p == path) {
            return Err(LoadError::Decode {
                path: path.to_path_buf(),
                reason: "unsupported format".into(),
            });
        }
        self.calls.push(EngineCall::Load(path.to_path_buf()));
        self.busy = false;
        Ok(())
    }

    fn play(&mut self) {
        self.calls.push(EngineCall::Play);
        self.busy = true;
    }

    fn pause(&mut self) {
        self.calls.push(EngineCall::Pause);
        self.busy = false;
    }

    fn unpause(&mut self) {
        self.calls.push(EngineCall::Unpause);
        self.busy = true;
    }

    fn stop(&mut self) {
        self.calls.push(EngineCall::Stop);
        self.busy = false;
    }

    fn unload(&mut self) {
        self.calls.push(EngineCall::Unload);
        self.busy = false;
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(EngineCall::SetVolume(volume));
    }
}
