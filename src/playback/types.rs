use std::fmt;

/// Transport state of the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stopped => "STOPPED",
            Self::Playing => "PLAYING",
            Self::Paused => "PAUSED",
        })
    }
}

/// How the next track is chosen on navigation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Step by one, stopping at either end of the playlist.
    #[default]
    Sequential,
    /// Pick any track uniformly; may pick the current one again.
    Random,
}

impl SelectionPolicy {
    pub fn toggled(self) -> Self {
        match self {
            Self::Sequential => Self::Random,
            Self::Random => Self::Sequential,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl From<crate::config::SelectionPolicySetting> for SelectionPolicy {
    fn from(setting: crate::config::SelectionPolicySetting) -> Self {
        match setting {
            crate::config::SelectionPolicySetting::Sequential => Self::Sequential,
            crate::config::SelectionPolicySetting::Random => Self::Random,
        }
    }
}
