//! The four transport operations behind the screen's controls.
//!
//! Each runs synchronously on the UI thread and leaves `App` and `Deck` in
//! a consistent pair of states: `Playing` iff a handle is live and running,
//! `Paused` iff one is live and paused, `Stopped` iff none is live.

use tracing::info;

use super::deck::Deck;
use super::engine::PlaybackEngine;
use crate::app::{App, PlaybackState};

/// Toggle between playing and paused.
///
/// Playing pauses the live handle without releasing it. Any other state
/// binds the selected track afresh and starts it from the top, which is
/// also how the screen leaves a paused binding.
pub fn toggle_play_pause<E: PlaybackEngine>(app: &mut App, deck: &mut Deck<E>) {
    if deck.is_playing() {
        deck.pause();
        app.playback = PlaybackState::Paused;
        return;
    }
    start_selected(app, deck);
}

/// Move to the next track and unconditionally (re)start playback.
pub fn next<E: PlaybackEngine>(app: &mut App, deck: &mut Deck<E>) {
    if !app.has_tracks() {
        return;
    }
    app.select_next();
    start_selected(app, deck);
}

/// Move to the previous track and unconditionally (re)start playback.
pub fn previous<E: PlaybackEngine>(app: &mut App, deck: &mut Deck<E>) {
    if !app.has_tracks() {
        return;
    }
    app.select_prev();
    start_selected(app, deck);
}

/// Release the current binding and return to the unbound state.
pub fn stop<E: PlaybackEngine>(app: &mut App, deck: &mut Deck<E>) {
    deck.release();
    app.playback = PlaybackState::Stopped;
}

fn start_selected<E: PlaybackEngine>(app: &mut App, deck: &mut Deck<E>) {
    app.clear_notice();

    let Some(track) = app.current_track() else {
        return;
    };
    let title = track.title.clone();

    let Some(path) = track.audio_path.clone() else {
        deck.release();
        app.playback = PlaybackState::Stopped;
        app.set_notice(format!("no audio file for \"{title}\""));
        return;
    };

    match deck.play(&path) {
        Ok(()) => {
            app.playback = PlaybackState::Playing;
            info!(index = app.selected, title = %title, "playing");
        }
        Err(e) => {
            // Bind failures are local to the screen: show a notice, stay unbound.
            app.playback = PlaybackState::Stopped;
            app.set_notice(e.to_string());
        }
    }
}
