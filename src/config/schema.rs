use std::path::PathBuf;

use serde::Deserialize;

use crate::player::RepeatMode;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playdeck/config.toml` or `~/.config/playdeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub media: MediaSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Initial volume in percent (0-100).
    pub volume: u8,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Initial repeat mode.
    pub repeat: RepeatSetting,
    /// Playlist index selected at startup.
    pub start_index: usize,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 75,
            shuffle: false,
            repeat: RepeatSetting::None,
            start_index: 0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatSetting {
    #[serde(alias = "off", alias = "no-repeat", alias = "no_repeat")]
    None,
    #[serde(alias = "repeat-one", alias = "repeat_one", alias = "single")]
    One,
    #[serde(alias = "repeat-all", alias = "repeat_all", alias = "loop")]
    All,
}

impl From<RepeatSetting> for RepeatMode {
    fn from(setting: RepeatSetting) -> Self {
        match setting {
            RepeatSetting::None => RepeatMode::Off,
            RepeatSetting::One => RepeatMode::One,
            RepeatSetting::All => RepeatMode::All,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    /// Directory media refs are resolved against (`/music/x.mp3` -> `<root>/music/x.mp3`).
    pub root: PathBuf,
    /// How often the audio thread reports the playback position (milliseconds).
    pub progress_interval_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            progress_interval_ms: 250,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Heading rendered at the top of the page.
    pub header_text: String,
    /// Line rendered under the heading.
    pub tagline: String,
    /// Terminal window title.
    pub window_title: String,
    /// Whether the playlist cursor starts out following the current track.
    pub follow_current: bool,
    /// Number of bars in the audio visualizer.
    pub visualizer_bars: usize,
    /// How often the visualizer picks new bar heights while playing (milliseconds).
    pub visualizer_refresh_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Music Player".to_string(),
            tagline: "Discover your favorite tunes".to_string(),
            window_title: "Saman Tofighian | MusicPlayer".to_string(),
            follow_current: true,
            visualizer_bars: 20,
            visualizer_refresh_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to seek when pressing `H` / `L`.
    pub seek_seconds: u64,
    /// Volume change in percent for `+` / `-`.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_seconds: 5,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is not set, e.g. `info` or `playdeck=debug`.
    pub level: String,
    /// Directory for log files; defaults to `$XDG_STATE_HOME/playdeck`.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
