use crate::app::{App, PlaybackState};
use crate::mpris::MprisHandle;

/// Push the screen's state to the MPRIS service. Metadata reflects the
/// selected track while a binding is live and clears when stopped.
pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    match app.playback {
        PlaybackState::Stopped => mpris.set_track_metadata(None, None),
        PlaybackState::Playing | PlaybackState::Paused => {
            mpris.set_track_metadata(Some(app.selected), app.current_track());
        }
    }
    mpris.set_playback(app.playback);
}
