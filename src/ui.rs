//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player observations (source, now playing, status,
//! volume, policy) and the track list using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config::UiSettings;
use crate::playback::{PlaybackController, SelectionPolicy};

/// Key bindings shown in the footer and the help window, in display order.
const CONTROLS: &[(&str, &str)] = &[
    ("space/p", "play/pause"),
    ("s", "stop"),
    ("h/l", "prev/next song"),
    ("-/+", "volume"),
    ("r", "random"),
    ("f", "open folder"),
    ("o", "open playlist"),
    ("w", "save playlist"),
    ("c", "clear playlist"),
    ("?", "help"),
    ("q", "quit"),
];

const HELP_TEXT: &str = "Open a folder holding at least two audio files with [f], or a saved \
playlist with [o]. [r] switches between sequential and random song order. Volume goes from \
0 to 10. [h]/[l] skip backwards or forwards, [space] pauses and resumes, [s] stops. The \
current playlist can be saved with [w] or cleared with [c].";

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn policy_text(policy: SelectionPolicy) -> &'static str {
    match policy {
        SelectionPolicy::Sequential => "Random: OFF",
        SelectionPolicy::Random => "Random: ON",
    }
}

fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_padded() -> Block<'static> {
    Block::default().borders(Borders::ALL).padding(Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    })
}

/// Render the entire UI into `frame`.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    app: &App,
    controller: &PlaybackController<E>,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" mixtape ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = format!(
        "Folder: {}\nNow Playing: {}\nStatus: {} • Volume: {:.0} • {}",
        controller.source_display(),
        controller.now_playing(),
        controller.state(),
        controller.volume(),
        policy_text(controller.selection_policy()),
    );
    let status_par = Paragraph::new(status)
        .block(left_padded().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Track list, current track highlighted.
    {
        let items: Vec<ListItem> = controller
            .playlist()
            .tracks()
            .iter()
            .map(|t| ListItem::new(t.filename()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(controller.current_index());
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Prompt line, or the last notice.
    let line = if let Some(prompt) = &app.prompt {
        Paragraph::new(format!("{}: {}_", prompt.kind.label(), prompt.input))
            .block(left_padded().title(" path (enter confirms, esc cancels) "))
    } else if let Some(notice) = &app.notice {
        Paragraph::new(notice.body.as_str())
            .bold()
            .block(left_padded().title(format!(" {} ", notice.title)))
    } else {
        Paragraph::new("").block(left_padded())
    };
    frame.render_widget(line, chunks[3]);

    if app.help_window {
        let popup_area = centered_rect_sized(72, 10, chunks[2]);
        frame.render_widget(Clear, popup_area);
        let help = Paragraph::new(HELP_TEXT)
            .block(left_padded().title(" help (? closes) "))
            .wrap(Wrap { trim: true });
        frame.render_widget(help, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(left_padded().title(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_bindings_in_order() {
        let text = controls_text();
        assert!(text.starts_with("[space/p] play/pause | [s] stop"));
        assert!(text.ends_with("[q] quit"));
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 12,
        };
        let r = centered_rect_sized(72, 10, area);
        assert!(r.width <= 38);
        assert!(r.x + r.width <= area.width);
        assert!(r.y + r.height <= area.height);
    }
}
