use std::path::Path;

use tracing::{info, warn};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config;
use crate::playback::PlaybackController;

/// Open the path given on the command line: a directory is scanned as a
/// folder, anything else is read as a saved playlist.
pub fn open_initial_path<E: AudioEngine>(
    path: &Path,
    controller: &mut PlaybackController<E>,
    app: &mut App,
    settings: &config::Settings,
) {
    let result = if path.is_dir() {
        controller.open_folder(path, &settings.library.extension)
    } else {
        controller.open_store(path)
    };

    match result {
        Ok(()) => info!(path = ?path, "opened start-up path"),
        Err(e) => {
            warn!(path = ?path, error = %e, "cannot open start-up path");
            app.show_error(&e);
        }
    }
}
