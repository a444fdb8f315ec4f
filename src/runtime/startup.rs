use tracing::warn;

use crate::config;
use crate::player::PlayerState;
use crate::playlist::Playlist;

/// Build the initial player state from the playback defaults.
pub fn initial_state(settings: &config::Settings, playlist: &Playlist) -> PlayerState {
    let playback = &settings.playback;

    let mut current_index = playback.start_index;
    if current_index >= playlist.len() {
        warn!(
            start_index = current_index,
            tracks = playlist.len(),
            "start_index is past the end of the playlist, starting at 0"
        );
        current_index = 0;
    }

    PlayerState {
        current_index,
        volume_percent: playback.volume.min(100),
        shuffle: playback.shuffle,
        repeat: playback.repeat.into(),
        ..PlayerState::default()
    }
}
