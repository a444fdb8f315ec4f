//! The single transition function for player state.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::playlist::Playlist;

use super::event::{Intent, MediaCmd, MediaNotice, PlayerEvent};
use super::state::{Generation, PlayerState, RepeatMode, volume_fraction};

/// Commands to issue once at startup: load the current track and push the
/// initial volume so the backend matches the state from the first frame.
pub fn initial_commands(state: &PlayerState, playlist: &Playlist) -> Vec<MediaCmd> {
    vec![
        MediaCmd::Load {
            media_ref: playlist.track(state.current_index).media_ref.clone(),
            generation: state.generation,
        },
        MediaCmd::SetVolume(volume_fraction(state.volume_percent)),
    ]
}

/// Apply `event` to `state` and return the media commands it implies.
///
/// `rng` is only consulted when advancing with shuffle enabled.
pub fn update<R: Rng + ?Sized>(
    state: &mut PlayerState,
    playlist: &Playlist,
    event: PlayerEvent,
    rng: &mut R,
) -> Vec<MediaCmd> {
    match event {
        PlayerEvent::Intent(intent) => apply_intent(state, playlist, intent, rng),
        PlayerEvent::Media(notice) => apply_notice(state, playlist, notice, rng),
    }
}

fn apply_intent<R: Rng + ?Sized>(
    state: &mut PlayerState,
    playlist: &Playlist,
    intent: Intent,
    rng: &mut R,
) -> Vec<MediaCmd> {
    match intent {
        Intent::TogglePlay => {
            let cmd = if state.is_playing {
                MediaCmd::Pause
            } else {
                MediaCmd::Play
            };
            state.is_playing = !state.is_playing;
            vec![cmd]
        }
        Intent::SelectTrack(index) => {
            if index >= playlist.len() {
                debug!(index, len = playlist.len(), "ignoring out-of-range track selection");
                return Vec::new();
            }
            change_track(state, playlist, index)
        }
        Intent::NextTrack => {
            let index = next_index(state, playlist, rng);
            change_track(state, playlist, index)
        }
        Intent::PreviousTrack => {
            let index = playlist.prev_index(state.current_index);
            change_track(state, playlist, index)
        }
        Intent::Seek(seconds) => {
            // Negative, NaN and overflowing values are not positions.
            let Ok(target) = Duration::try_from_secs_f64(seconds) else {
                debug!(seconds, "ignoring invalid seek target");
                return Vec::new();
            };
            let target = target.min(playlist.track(state.current_index).duration);
            state.elapsed = target;
            vec![MediaCmd::Seek(target)]
        }
        Intent::SetVolume(percent) => {
            let percent = percent.clamp(0, 100) as u8;
            state.volume_percent = percent;
            vec![MediaCmd::SetVolume(volume_fraction(percent))]
        }
        Intent::ToggleShuffle => {
            state.shuffle = !state.shuffle;
            Vec::new()
        }
        Intent::CycleRepeat => {
            state.repeat = state.repeat.cycled();
            Vec::new()
        }
        Intent::ToggleLiked => {
            state.liked = !state.liked;
            Vec::new()
        }
    }
}

fn apply_notice<R: Rng + ?Sized>(
    state: &mut PlayerState,
    playlist: &Playlist,
    notice: MediaNotice,
    rng: &mut R,
) -> Vec<MediaCmd> {
    if !is_current(state, notice.generation()) {
        debug!(
            stale = notice.generation().value(),
            current = state.generation.value(),
            "dropping notification from superseded load"
        );
        return Vec::new();
    }

    match notice {
        MediaNotice::Progress { position, .. } => {
            state.elapsed = position.min(playlist.track(state.current_index).duration);
            Vec::new()
        }
        MediaNotice::Loaded { .. } => {
            if state.is_playing {
                vec![MediaCmd::Play]
            } else {
                Vec::new()
            }
        }
        MediaNotice::Ended { .. } => match state.repeat {
            RepeatMode::One => {
                state.elapsed = Duration::ZERO;
                // A pause that raced the end notice wins.
                if state.is_playing {
                    vec![MediaCmd::Seek(Duration::ZERO), MediaCmd::Play]
                } else {
                    vec![MediaCmd::Seek(Duration::ZERO)]
                }
            }
            RepeatMode::All => advance_after_end(state, playlist, rng),
            RepeatMode::Off if state.current_index < playlist.last_index() => {
                advance_after_end(state, playlist, rng)
            }
            RepeatMode::Off => {
                state.is_playing = false;
                state.elapsed = playlist.track(state.current_index).duration;
                Vec::new()
            }
        },
    }
}

fn is_current(state: &PlayerState, generation: Generation) -> bool {
    state.generation == generation
}

fn advance_after_end<R: Rng + ?Sized>(
    state: &mut PlayerState,
    playlist: &Playlist,
    rng: &mut R,
) -> Vec<MediaCmd> {
    let index = next_index(state, playlist, rng);
    change_track(state, playlist, index)
}

/// Uniform over the whole playlist when shuffling (the current track may
/// come up again), otherwise the next index with wrap-around.
fn next_index<R: Rng + ?Sized>(state: &PlayerState, playlist: &Playlist, rng: &mut R) -> usize {
    if state.shuffle {
        rng.gen_range(0..playlist.len())
    } else {
        playlist.next_index(state.current_index)
    }
}

/// Point the state at `index` and request a fresh load under a new generation.
///
/// Re-selecting the current index also reloads, so the track restarts from
/// the position the state now reports.
fn change_track(state: &mut PlayerState, playlist: &Playlist, index: usize) -> Vec<MediaCmd> {
    state.current_index = index;
    state.elapsed = Duration::ZERO;
    state.generation = state.generation.next();
    vec![MediaCmd::Load {
        media_ref: playlist.track(index).media_ref.clone(),
        generation: state.generation,
    }]
}
