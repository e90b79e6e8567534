//! Playback: the engine seam, the deck that owns the live handle, and the
//! transport operations the screen's controls map to.

mod deck;
mod engine;
mod transport;

pub use deck::Deck;
pub use engine::{PlaybackEngine, PlaybackHandle, RodioEngine};
pub use transport::{next, previous, stop, toggle_play_pause};
