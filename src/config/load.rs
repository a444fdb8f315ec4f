use std::{env, path::PathBuf};

use super::error::ConfigError;
use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `PLAYDECK__`) over an
/// optional config file over struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYDECK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the player cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.volume > 100 {
            return Err(ConfigError::invalid(
                "playback.volume",
                format!("{} is above 100", self.playback.volume),
            ));
        }
        if self.media.progress_interval_ms < 10 {
            return Err(ConfigError::invalid(
                "media.progress_interval_ms",
                "must be at least 10",
            ));
        }
        if self.ui.visualizer_bars == 0 {
            return Err(ConfigError::invalid("ui.visualizer_bars", "must be >= 1"));
        }
        if self.controls.seek_seconds == 0 {
            return Err(ConfigError::invalid("controls.seek_seconds", "must be >= 1"));
        }
        if !(1..=100).contains(&self.controls.volume_step) {
            return Err(ConfigError::invalid(
                "controls.volume_step",
                "must be between 1 and 100",
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `PLAYDECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYDECK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/playdeck/config.toml`, or `~/.config/playdeck/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("playdeck").join("config.toml"))
}

/// Default log directory: `$XDG_STATE_HOME/playdeck` or `~/.local/state/playdeck`.
pub fn default_log_dir() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("playdeck"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
}
