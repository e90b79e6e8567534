//! Screen lifecycle: settings, catalog setup, terminal entry/exit and the
//! event loop.

use std::env;
use std::path::Path;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::catalog;
use crate::error::PlayerError;
use crate::logging;
use crate::mpris::{self, ControlCmd};
use crate::player::{Deck, RodioEngine};

mod event_loop;
mod mpris_sync;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);

    let initial_index = parse_index_arg(env::args().nth(1))?;

    let mut catalog = catalog::builtin();
    catalog.resolve_assets(Path::new(&settings.assets.dir));
    if settings.assets.verify_durations {
        catalog.verify_durations();
    }
    // Entry contract: the caller-supplied index must land in the catalog.
    let initial_index = catalog.validate_index(initial_index)?;

    let engine = RodioEngine::new()?;
    let mut deck = Deck::new(engine);
    let mut app = App::new(catalog, initial_index);

    info!(index = initial_index, "starting rondo");

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = mpris::spawn_mpris(control_tx);
    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut deck,
        &mpris,
        &control_rx,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The deck drops here, releasing any live playback handle.
    run_result
}

/// Parse the optional initial-index argument. Missing means index 0.
fn parse_index_arg(arg: Option<String>) -> Result<usize, PlayerError> {
    match arg {
        None => Ok(0),
        Some(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| PlayerError::BadIndexArg(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_index_arg;

    #[test]
    fn missing_index_argument_defaults_to_zero() {
        assert_eq!(parse_index_arg(None).unwrap(), 0);
    }

    #[test]
    fn numeric_index_argument_is_accepted() {
        assert_eq!(parse_index_arg(Some("7".to_string())).unwrap(), 7);
        assert_eq!(parse_index_arg(Some(" 3 ".to_string())).unwrap(), 3);
    }

    #[test]
    fn non_numeric_index_argument_is_rejected() {
        assert!(parse_index_arg(Some("three".to_string())).is_err());
        assert!(parse_index_arg(Some("-1".to_string())).is_err());
    }
}
