//! Exclusive ownership of the single live playback handle.

use std::path::Path;

use tracing::debug;

use super::engine::{PlaybackEngine, PlaybackHandle};
use crate::error::PlayerError;

/// Owns at most one live handle at a time.
///
/// Replacing a binding or dropping the deck releases the previous handle;
/// pausing does not. Dropping the deck is the screen's teardown path, so no
/// playback resource outlives it.
pub struct Deck<E: PlaybackEngine> {
    engine: E,
    handle: Option<E::Handle>,
}

impl<E: PlaybackEngine> Deck<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            handle: None,
        }
    }

    /// Release any current handle, bind `path` fresh and start it.
    ///
    /// On a bind error the old handle is already gone and nothing is live.
    pub fn play(&mut self, path: &Path) -> Result<(), PlayerError> {
        // Release before binding so only one handle is ever live.
        self.release();
        let handle = self.engine.bind(path)?;
        handle.start();
        self.handle = Some(handle);
        debug!(path = %path.display(), "bound and started");
        Ok(())
    }

    /// Pause the current handle. The binding stays live.
    pub fn pause(&mut self) {
        if let Some(h) = self.handle.as_ref() {
            h.pause();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.handle.as_ref().map(|h| h.is_playing()).unwrap_or(false)
    }

    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Drop the current handle, if any. Releasing with nothing live is a
    /// no-op, never a fault.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            debug!("released playback handle");
        }
    }
}
