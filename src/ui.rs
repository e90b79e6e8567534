//! UI rendering for the player screen.
//!
//! One fixed vertical layout: header, artwork stand-in, track info, status
//! line and a controls footer. The text helpers are pure so they can be
//! checked without a terminal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlaybackState};
use crate::config::UiSettings;

/// The "Title:" / "Duration:" block for the selected track.
fn track_info_text(app: &App) -> String {
    match app.current_track() {
        Some(track) => format!(
            "Title: {}\nDuration: {}",
            track.title, track.duration_label
        ),
        None => "The catalog is empty".to_string(),
    }
}

/// Terminal stand-in for the artwork image: the resolved file when present,
/// otherwise the raw artwork reference.
fn artwork_text(app: &App) -> String {
    let Some(track) = app.current_track() else {
        return String::new();
    };
    match &track.artwork_path {
        Some(path) => format!("♪\n\n{}", path.display()),
        None => format!("♪\n\n{} (artwork not found)", track.artwork),
    }
}

fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match app.playback {
        PlaybackState::Stopped => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    };
    parts.push(state.to_string());
    parts.push(format!("Track {}/{}", app.selected + 1, app.catalog.len()));
    parts.push(format!("[space] {}", app.control_label()));

    if let Some(notice) = &app.notice {
        parts.push(format!("! {notice}"));
    }

    parts.join(" • ")
}

fn controls_text() -> String {
    [
        "[space/p] play/pause",
        "[h/←] previous",
        "[l/→] next",
        "[q/esc] back",
    ]
    .join(" | ")
}

/// Render the entire screen into `frame` from `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let mut constraints = vec![Constraint::Length(3)];
    if ui_settings.show_artwork {
        constraints.push(Constraint::Min(5));
    }
    constraints.extend([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(3),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());
    let mut next_chunk = 0;
    let mut chunk = || {
        let area = chunks[next_chunk];
        next_chunk += 1;
        area
    };

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" rondo ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunk());

    // Artwork panel
    if ui_settings.show_artwork {
        let artwork = Paragraph::new(artwork_text(app))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" artwork "))
            .wrap(Wrap { trim: true });
        frame.render_widget(artwork, chunk());
    }

    // Track info
    let info = Paragraph::new(track_info_text(app))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" track "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunk());

    // Status line
    let status_style = if app.playback == PlaybackState::Playing {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let status = Paragraph::new(status_text(app))
        .style(status_style)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunk());

    // Controls footer
    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunk());
}
