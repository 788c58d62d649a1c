//! Shell-side model: path prompts, user notices and the help window.
//!
//! Playback state itself lives in the `PlaybackController`; this only tracks
//! what the terminal UI needs on top of it.

use crate::error::PlayerError;

/// What a path prompt is asking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    OpenFolder,
    OpenPlaylist,
    SavePlaylist,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenFolder => "Open folder",
            Self::OpenPlaylist => "Open playlist",
            Self::SavePlaylist => "Save playlist as",
        }
    }
}

/// A line of text being typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// A message shown to the user until the next key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub body: String,
}

impl Notice {
    pub fn new(title: &'static str, body: impl Into<String>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// User-facing wording for a failed operation.
    pub fn from_error(err: &PlayerError) -> Self {
        match err {
            PlayerError::InsufficientTracks { .. } | PlayerError::NotADirectory(_) => Self::new(
                "ERROR",
                "Please choose a folder or playlist with at least two songs in it.",
            ),
            PlayerError::InvalidStoreFormat(_) => {
                Self::new("Invalid File", "Choose a valid playlist with audio files.")
            }
            PlayerError::NoTrackLoaded => Self::new(
                "No song to play",
                "Please choose a folder or playlist with at least two songs in it.",
            ),
            PlayerError::EmptyPlaylist => Self::new(
                "MP3 Required",
                "Load a playlist or folder of audio files in order to switch song.",
            ),
            PlayerError::Load(e) => Self::new("Cannot play song", e.to_string()),
            PlayerError::Io(e) => Self::new("File error", e.to_string()),
            PlayerError::InvalidPath(_) => Self::new(
                "Invalid Folder",
                "Folder names must be valid UTF-8 to be stored in a playlist.",
            ),
            PlayerError::Encode(e) => Self::new("Cannot save playlist", e.to_string()),
        }
    }

    /// Wording for a failure of the operation `kind` asked for.
    ///
    /// The same error reads differently depending on whether a folder was
    /// being opened, a playlist read, or the playlist saved.
    pub fn for_prompt(kind: PromptKind, err: &PlayerError) -> Self {
        match (kind, err) {
            (PromptKind::OpenPlaylist, PlayerError::InsufficientTracks { found: 0 }) => {
                Self::new("Empty Playlist", "Choose a playlist with songs in it.")
            }
            (PromptKind::OpenPlaylist, PlayerError::InsufficientTracks { .. }) => Self::new(
                "ERROR",
                "Please choose a playlist with at least two songs in it.",
            ),
            (PromptKind::OpenPlaylist, PlayerError::Io(_)) => {
                Self::new("Invalid File", "Choose a valid playlist with audio files.")
            }
            (PromptKind::SavePlaylist, PlayerError::InsufficientTracks { .. }) => {
                Self::save_needs_tracks()
            }
            _ => Self::from_error(err),
        }
    }

    /// Shown when saving is attempted without a full playlist.
    pub fn save_needs_tracks() -> Self {
        Self::new(
            "MP3 Required",
            "Please choose a folder with at least two audio files before saving a playlist.",
        )
    }
}

/// Terminal shell state.
#[derive(Debug, Default)]
pub struct App {
    pub prompt: Option<Prompt>,
    pub notice: Option<Notice>,
    pub help_window: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_help_window(&mut self) {
        self.help_window = !self.help_window;
    }

    /// Begin typing a path for `kind`, replacing any open prompt.
    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.notice = None;
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.pop();
        }
    }

    /// Close the prompt and hand back what was typed, trimmed.
    ///
    /// An empty entry is reported as a notice instead.
    pub fn submit_prompt(&mut self) -> Option<(PromptKind, String)> {
        let prompt = self.prompt.take()?;
        let input = prompt.input.trim().to_string();
        if input.is_empty() {
            self.notice = Some(match prompt.kind {
                PromptKind::SavePlaylist => {
                    Notice::new("Name Required", "Filename required before saving")
                }
                PromptKind::OpenFolder | PromptKind::OpenPlaylist => {
                    Notice::new("Path Required", "Type a path before pressing enter")
                }
            });
            return None;
        }
        Some((prompt.kind, input))
    }

    pub fn show_error(&mut self, err: &PlayerError) {
        self.notice = Some(Notice::from_error(err));
    }

    /// Report a failure of the operation a prompt was opened for.
    pub fn show_prompt_error(&mut self, kind: PromptKind, err: &PlayerError) {
        self.notice = Some(Notice::for_prompt(kind, err));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
