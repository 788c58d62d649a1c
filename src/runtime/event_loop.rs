use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::app::{App, Notice, PromptKind};
use crate::audio::AudioEngine;
use crate::config;
use crate::error::Result;
use crate::playback::{Direction, EndOfTrackPoller, PlaybackController};
use crate::playlist::MIN_TRACKS;
use crate::ui;

/// Upper bound on how long to wait for input before redrawing.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Volume step for `-`/`+`, on the 0-10 scale.
const VOLUME_STEP: f64 = 1.0;

/// Main terminal event loop: draws, runs the end-of-track check when due and
/// handles input. Returns `Ok(())` when shutdown is requested.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<E>,
    poller: &mut EndOfTrackPoller,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, controller, &settings.ui))?;

        let now = Instant::now();
        if let Err(e) = poller.poll(now, controller) {
            warn!(error = %e, "automatic advance failed");
            app.show_error(&e);
        }

        let timeout = poller
            .time_until_due(Instant::now())
            .map_or(INPUT_POLL, |d| d.min(INPUT_POLL));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, controller) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Report a failed operation to the user without stopping the player.
fn report<T>(app: &mut App, result: Result<T>) {
    if let Err(e) = result {
        warn!(error = %e, "operation failed");
        app.show_error(&e);
    }
}

fn handle_prompt_key<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<E>,
) {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Backspace => app.pop_prompt_char(),
        KeyCode::Char(c) if !c.is_control() => app.push_prompt_char(c),
        KeyCode::Enter => {
            let Some((kind, input)) = app.submit_prompt() else {
                return;
            };
            let path = Path::new(&input);
            let result = match kind {
                PromptKind::OpenFolder => {
                    controller.open_folder(path, &settings.library.extension)
                }
                PromptKind::OpenPlaylist => controller.open_store(path),
                PromptKind::SavePlaylist => controller.save_store(path),
            };
            if let Err(e) = result {
                warn!(error = %e, ?kind, "operation failed");
                app.show_prompt_error(kind, &e);
            }
        }
        _ => {}
    }
}

/// Returns `true` when the user asked to quit.
fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<E>,
) -> bool {
    if app.prompt.is_some() {
        handle_prompt_key(key, settings, app, controller);
        return false;
    }

    app.dismiss_notice();
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let result = controller.toggle_pause_play();
            report(app, result);
        }
        KeyCode::Char('s') => controller.stop(),
        KeyCode::Char('l') | KeyCode::Right => {
            let result = controller.advance(Direction::Next);
            report(app, result);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            let result = controller.advance(Direction::Previous);
            report(app, result);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            controller.set_volume(controller.volume() + VOLUME_STEP);
        }
        KeyCode::Char('-') => {
            controller.set_volume(controller.volume() - VOLUME_STEP);
        }
        KeyCode::Char('r') => {
            let policy = controller.selection_policy().toggled();
            controller.set_selection_policy(policy);
        }
        KeyCode::Char('f') => app.open_prompt(PromptKind::OpenFolder),
        KeyCode::Char('o') => app.open_prompt(PromptKind::OpenPlaylist),
        KeyCode::Char('w') => {
            if controller.playlist().len() < MIN_TRACKS {
                app.notice = Some(Notice::save_needs_tracks());
            } else {
                app.open_prompt(PromptKind::SavePlaylist);
            }
        }
        KeyCode::Char('c') => controller.clear(),
        KeyCode::Char('?') => app.toggle_help_window(),
        _ => {}
    }

    false
}
