//! Error types for the player screen.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// Caller-supplied track index outside the catalog.
    #[error("track index {index} is out of range (the catalog holds {len} tracks)")]
    InvalidIndex { index: usize, len: usize },

    /// The initial index argument was not a number at all.
    #[error("initial track index must be a number, got {0:?}")]
    BadIndexArg(String),

    /// The engine could not open or decode an audio asset.
    /// Surfaces as a status-line notice, never a crash.
    #[error("cannot play {}: {}", .path.display(), .source)]
    Bind {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio output device was available at startup.
    #[error("no audio output device available: {0}")]
    NoOutputDevice(String),
}
