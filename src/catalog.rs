//! The fixed track catalog.
//!
//! The catalog is immutable for the lifetime of the screen: ten tracks,
//! each with a display title, a hand-authored duration label and the file
//! stems of its audio and artwork assets.

mod builtin;
mod model;

pub use builtin::builtin;
pub use model::*;

#[cfg(test)]
mod tests;
