use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/rondo/config.toml` or `~/.config/rondo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RONDO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: AssetsSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets: AssetsSettings::default(),
            ui: UiSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsSettings {
    /// Directory searched (recursively) for the catalog's audio and artwork
    /// files.
    pub dir: String,
    /// Whether to compare the hand-authored duration labels against the
    /// audio files at startup. Disagreements are only logged.
    pub verify_durations: bool,
}

impl Default for AssetsSettings {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
            verify_durations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "rondo" header box.
    pub header_text: String,
    /// Whether to render the artwork panel.
    pub show_artwork: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ ten songs, round and round ~ ".to_string(),
            show_artwork: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file path. Logging is disabled when unset; the terminal itself is
    /// never written to. Filtered through `RONDO_LOG`.
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { file: None }
    }
}
