use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::PlayerError;

/// One entry of the fixed catalog.
#[derive(Clone, Debug)]
pub struct Track {
    /// Display title, shown verbatim. The builtin set is inconsistent about
    /// "Artist - Name" vs "Name - Artist".
    pub title: String,
    /// Hand-authored "M:SS" label. Informational only, never derived from
    /// the audio file.
    pub duration_label: String,
    /// File stem of the artwork asset.
    pub artwork: String,
    /// File stem of the audio asset.
    pub audio: String,
    /// Resolved audio file, when found under the assets directory.
    pub audio_path: Option<PathBuf>,
    /// Resolved artwork file, when found under the assets directory.
    pub artwork_path: Option<PathBuf>,
}

/// The immutable, ordered set of tracks available to the screen.
#[derive(Clone, Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
}

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "ogg"];
pub const ARTWORK_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Measured durations further than this from the label get a log warning.
const DURATION_TOLERANCE: Duration = Duration::from_secs(2);

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Entry-contract check for the caller-supplied initial index.
    pub fn validate_index(&self, index: usize) -> Result<usize, PlayerError> {
        if index < self.tracks.len() {
            Ok(index)
        } else {
            Err(PlayerError::InvalidIndex {
                index,
                len: self.tracks.len(),
            })
        }
    }

    /// Fold any index into `[0, len)`. Defensive counterpart of
    /// `validate_index` for callers that already passed the boundary.
    pub fn wrap_index(&self, index: usize) -> usize {
        if self.tracks.is_empty() {
            0
        } else {
            index % self.tracks.len()
        }
    }

    /// The index after `index`, wrapping at the end of the catalog.
    pub fn next_index(&self, index: usize) -> usize {
        if self.tracks.is_empty() {
            0
        } else {
            (index + 1) % self.tracks.len()
        }
    }

    /// The index before `index`, wrapping at the start of the catalog.
    pub fn prev_index(&self, index: usize) -> usize {
        let n = self.tracks.len();
        if n == 0 { 0 } else { (index + n - 1) % n }
    }

    /// Locate audio and artwork files under `assets_dir`.
    ///
    /// Unresolved assets stay `None`; binding such a track later surfaces a
    /// status-line notice instead of failing the whole catalog.
    pub fn resolve_assets(&mut self, assets_dir: &Path) {
        for track in &mut self.tracks {
            track.audio_path = find_asset(assets_dir, &track.audio, AUDIO_EXTENSIONS);
            track.artwork_path = find_asset(assets_dir, &track.artwork, ARTWORK_EXTENSIONS);
            if track.audio_path.is_none() {
                debug!(title = %track.title, stem = %track.audio, "no audio asset found");
            }
        }
    }

    /// Compare hand-authored duration labels against the audio files.
    ///
    /// The label stays the display source of truth; disagreements beyond the
    /// tolerance are only logged.
    pub fn verify_durations(&self) {
        for track in self.tracks() {
            let Some(path) = track.audio_path.as_deref() else {
                continue;
            };
            let Some(labeled) = parse_duration_label(&track.duration_label) else {
                warn!(title = %track.title, label = %track.duration_label, "unparseable duration label");
                continue;
            };
            let Ok(tagged) = lofty::read_from_path(path) else {
                continue;
            };

            let measured = tagged.properties().duration();
            let delta = if measured > labeled {
                measured - labeled
            } else {
                labeled - measured
            };
            if delta > DURATION_TOLERANCE {
                warn!(
                    title = %track.title,
                    label = %track.duration_label,
                    measured_secs = measured.as_secs(),
                    "duration label disagrees with audio file"
                );
            }
        }
    }
}

/// Parse a hand-authored "M:SS" label into a `Duration`.
pub fn parse_duration_label(label: &str) -> Option<Duration> {
    let (minutes, seconds) = label.trim().split_once(':')?;
    if seconds.len() != 2 {
        return None;
    }
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(Duration::from_secs(minutes * 60 + seconds))
}

/// Find `<stem>.<ext>` anywhere under `dir` for any allowed extension.
pub fn find_asset(dir: &Path, stem: &str, extensions: &[&str]) -> Option<PathBuf> {
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let stem_matches = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s == stem)
            .unwrap_or(false);
        if !stem_matches {
            continue;
        }
        let ext_matches = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
            .unwrap_or(false);
        if ext_matches {
            return Some(path.to_path_buf());
        }
    }
    None
}
