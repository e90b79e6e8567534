//! Screen model types: `App` and `PlaybackState`.

use crate::catalog::{Catalog, Track};

/// The playback state of the screen.
///
/// `Stopped` means no live binding exists; `Paused` keeps the binding alive
/// without output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// The single-screen player model.
pub struct App {
    pub catalog: Catalog,
    pub selected: usize,
    pub playback: PlaybackState,
    /// One-line non-fatal notice (e.g. a failed bind), shown in the status box.
    pub notice: Option<String>,
}

impl App {
    /// Create the screen focused on `initial_index`.
    ///
    /// The caller-supplied index is folded into the catalog rather than
    /// trusted; the CLI boundary rejects out-of-range input earlier with a
    /// proper error. No playback starts here.
    pub fn new(catalog: Catalog, initial_index: usize) -> Self {
        let selected = catalog.wrap_index(initial_index);
        Self {
            catalog,
            selected,
            playback: PlaybackState::Stopped,
            notice: None,
        }
    }

    /// The track the screen currently displays.
    pub fn current_track(&self) -> Option<&Track> {
        self.catalog.get(self.selected)
    }

    /// Move selection to the next track, wrapping at the end of the catalog.
    pub fn select_next(&mut self) {
        self.selected = self.catalog.next_index(self.selected);
    }

    /// Move selection to the previous track, wrapping at the start.
    pub fn select_prev(&mut self) {
        self.selected = self.catalog.prev_index(self.selected);
    }

    /// Label for the play/pause control.
    pub fn control_label(&self) -> &'static str {
        match self.playback {
            PlaybackState::Playing => "Pause",
            PlaybackState::Stopped | PlaybackState::Paused => "Play",
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Return true if the catalog contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.catalog.is_empty()
    }
}
