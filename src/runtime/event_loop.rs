use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config::Settings;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{self, Deck, PlaybackEngine};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// Main terminal event loop: draws the screen, applies key presses and
/// MPRIS commands to the transport. Returns when the screen is dismissed.
pub fn run<E: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    deck: &mut Deck<E>,
    mpris: &MprisHandle,
    control_rx: &Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            match cmd {
                ControlCmd::Quit => return Ok(()),
                ControlCmd::Play => {
                    if !deck.is_playing() {
                        player::toggle_play_pause(app, deck);
                    }
                }
                ControlCmd::Pause => {
                    if deck.is_playing() {
                        player::toggle_play_pause(app, deck);
                    }
                }
                ControlCmd::PlayPause => player::toggle_play_pause(app, deck),
                ControlCmd::Stop => player::stop(app, deck),
                ControlCmd::Next => player::next(app, deck),
                ControlCmd::Prev => player::previous(app, deck),
            }
            update_mpris(mpris, app);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    // Dismiss: back to whatever launched this screen.
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Char('p') => {
                        player::toggle_play_pause(app, deck);
                    }
                    KeyCode::Char('l') | KeyCode::Right => player::next(app, deck),
                    KeyCode::Char('h') | KeyCode::Left => player::previous(app, deck),
                    _ => {}
                }
                update_mpris(mpris, app);
            }
        }
    }
}
