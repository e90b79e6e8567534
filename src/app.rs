//! Application module: the single-screen player model.
//!
//! The `App` model lives in `app::model` and holds the catalog, the current
//! selection and the playback state shown by the UI.

mod model;

pub use model::*;
