use crate::config;

/// Load and validate settings. Falls back to defaults on failure and hands
/// the error back so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<config::ConfigError>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e)),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
