//! File-backed tracing setup.
//!
//! The screen owns the terminal in raw mode, so log output goes to a file
//! instead of stderr. Logging is enabled only when a file is configured and
//! is filtered through `RONDO_LOG`.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

pub fn init(settings: &LoggingSettings) {
    let Some(path) = settings.file.as_deref() else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("rondo: cannot open log file {path}: {e}");
            return;
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RONDO_LOG")
        .unwrap_or_else(|_| "rondo=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
}
