use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioEngine;
use crate::playback::{EndOfTrackPoller, PlaybackController};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }

    let engine = RodioEngine::open_default()?;
    let mut controller = PlaybackController::new(engine, &settings.playback);
    let mut app = App::new();

    if let Some(path) = env::args().nth(1).map(PathBuf::from) {
        startup::open_initial_path(&path, &mut controller, &mut app, &settings);
    }

    let mut poller =
        EndOfTrackPoller::new(Duration::from_millis(settings.playback.poll_interval_ms));
    poller.start(Instant::now());
    info!(period = ?poller.period(), "player started");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &mut poller,
    );

    poller.stop();
    controller.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("player exited");
    run_result
}
