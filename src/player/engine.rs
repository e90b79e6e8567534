//! The playback engine seam and its rodio implementation.
//!
//! The screen only relies on this contract: bind an audio file to a fresh,
//! paused handle, then start/pause/observe it. Dropping a handle releases
//! the underlying resource.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use crate::error::PlayerError;

/// A live binding between the screen and one track's audio resource.
pub trait PlaybackHandle {
    fn start(&self);
    fn pause(&self);
    fn is_playing(&self) -> bool;
}

/// Creates playback handles. The deck keeps at most one of them live.
pub trait PlaybackEngine {
    type Handle: PlaybackHandle;

    /// Bind `path` to a fresh, paused handle.
    fn bind(&self, path: &Path) -> Result<Self::Handle, PlayerError>;
}

/// rodio-backed engine. Owns the output stream for the screen's lifetime.
pub struct RodioEngine {
    stream: OutputStream,
}

impl RodioEngine {
    pub fn new() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::NoOutputDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

pub struct RodioHandle {
    sink: Sink,
}

impl PlaybackHandle for RodioHandle {
    fn start(&self) {
        self.sink.play();
    }

    fn pause(&self) {
        self.sink.pause();
    }

    fn is_playing(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }
}

impl Drop for RodioHandle {
    fn drop(&mut self) {
        self.sink.stop();
    }
}

impl PlaybackEngine for RodioEngine {
    type Handle = RodioHandle;

    fn bind(&self, path: &Path) -> Result<RodioHandle, PlayerError> {
        let file = File::open(path).map_err(|e| PlayerError::Bind {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Bind {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(RodioHandle { sink })
    }
}
