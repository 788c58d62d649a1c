use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, LoggingSettings};

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).write(true).open(path)
}

/// Install the global `tracing` subscriber, writing to the log file.
///
/// The terminal belongs to the TUI, so nothing is logged when no file can be
/// opened. Returns whether logging is active.
pub fn init(settings: &LoggingSettings) -> bool {
    let Some(path) = settings.file.clone().or_else(config::default_log_path) else {
        return false;
    };
    let Ok(file) = open_log_file(&path) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .is_ok()
}
