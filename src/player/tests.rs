use super::*;
use crate::playlist::{Playlist, Track, builtin_tracks};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(String, Generation),
    Play,
    Pause,
    Seek(Duration),
    Volume(f32),
}

struct FakeMedia {
    ready: bool,
    calls: Vec<Call>,
}

impl FakeMedia {
    fn ready() -> Self {
        Self {
            ready: true,
            calls: Vec::new(),
        }
    }
}

impl MediaHandle for FakeMedia {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn load(&mut self, media_ref: &str, generation: Generation) {
        self.calls.push(Call::Load(media_ref.to_string(), generation));
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.calls.push(Call::Seek(position));
    }

    fn set_volume(&mut self, fraction: f32) {
        self.calls.push(Call::Volume(fraction));
    }
}

fn playlist() -> Playlist {
    Playlist::new(builtin_tracks()).unwrap()
}

fn view() -> PlayerView<FakeMedia> {
    PlayerView::with_rng(
        playlist(),
        FakeMedia::ready(),
        PlayerState::default(),
        StdRng::seed_from_u64(7),
    )
}

fn step(state: &mut PlayerState, event: impl Into<PlayerEvent>) -> Vec<MediaCmd> {
    let mut rng = StdRng::seed_from_u64(1);
    update(state, &playlist(), event.into(), &mut rng)
}

#[test]
fn next_track_without_shuffle_advances_modulo_len() {
    let len = playlist().len();
    for start in 0..len {
        for n in 0..12 {
            let mut state = PlayerState {
                current_index: start,
                ..PlayerState::default()
            };
            for _ in 0..n {
                step(&mut state, Intent::NextTrack);
            }
            assert_eq!(state.current_index, (start + n) % len);
        }
    }
}

#[test]
fn previous_then_next_returns_to_start() {
    for start in 0..playlist().len() {
        let mut state = PlayerState {
            current_index: start,
            ..PlayerState::default()
        };
        step(&mut state, Intent::PreviousTrack);
        step(&mut state, Intent::NextTrack);
        assert_eq!(state.current_index, start);
    }
}

#[test]
fn previous_wraps_and_ignores_shuffle() {
    let mut state = PlayerState {
        shuffle: true,
        ..PlayerState::default()
    };
    step(&mut state, Intent::PreviousTrack);
    assert_eq!(state.current_index, 4);
    step(&mut state, Intent::PreviousTrack);
    assert_eq!(state.current_index, 3);
}

#[test]
fn five_tracks_next_four_times_then_wraps() {
    let mut state = PlayerState::default();
    for _ in 0..4 {
        step(&mut state, Intent::NextTrack);
    }
    assert_eq!(state.current_index, 4);
    step(&mut state, Intent::NextTrack);
    assert_eq!(state.current_index, 0);
}

#[test]
fn track_changes_reset_elapsed_and_bump_generation() {
    let mut state = PlayerState {
        elapsed: Duration::from_secs(42),
        ..PlayerState::default()
    };
    let before = state.generation;
    let cmds = step(&mut state, Intent::NextTrack);
    assert_eq!(state.elapsed, Duration::ZERO);
    assert_eq!(state.generation, before.next());
    assert_eq!(
        cmds,
        vec![MediaCmd::Load {
            media_ref: "/music/Nagoo-Na-Amir-Tataloo.mp3".to_string(),
            generation: before.next(),
        }]
    );
}

#[test]
fn shuffle_next_stays_in_range_and_may_repeat() {
    let playlist = playlist();
    let mut rng = StdRng::seed_from_u64(99);
    let mut state = PlayerState {
        shuffle: true,
        ..PlayerState::default()
    };
    let mut seen = [false; 5];
    let mut repeated = false;
    for _ in 0..500 {
        let before = state.current_index;
        update(&mut state, &playlist, Intent::NextTrack.into(), &mut rng);
        assert!(state.current_index < playlist.len());
        seen[state.current_index] = true;
        repeated |= before == state.current_index;
    }
    assert!(seen.iter().all(|&s| s));
    assert!(repeated);
}

#[test]
fn cycle_repeat_steps_and_round_trips() {
    assert_eq!(RepeatMode::Off.cycled(), RepeatMode::One);
    assert_eq!(RepeatMode::One.cycled(), RepeatMode::All);
    assert_eq!(RepeatMode::All.cycled(), RepeatMode::Off);

    for start in [RepeatMode::Off, RepeatMode::One, RepeatMode::All] {
        let mut state = PlayerState {
            repeat: start,
            ..PlayerState::default()
        };
        for _ in 0..3 {
            assert!(step(&mut state, Intent::CycleRepeat).is_empty());
        }
        assert_eq!(state.repeat, start);
    }
}

#[test]
fn seek_sets_elapsed_optimistically() {
    let mut state = PlayerState::default();
    for x in [0.0, 1.0, 42.5, 179.0, 180.0] {
        let cmds = step(&mut state, Intent::Seek(x));
        assert_eq!(state.elapsed, Duration::from_secs_f64(x));
        assert_eq!(cmds, vec![MediaCmd::Seek(Duration::from_secs_f64(x))]);
    }
}

#[test]
fn seek_out_of_range_is_clamped_or_ignored() {
    let mut state = PlayerState {
        elapsed: Duration::from_secs(10),
        ..PlayerState::default()
    };

    let cmds = step(&mut state, Intent::Seek(-3.0));
    assert!(cmds.is_empty());
    assert_eq!(state.elapsed, Duration::from_secs(10));

    assert!(step(&mut state, Intent::Seek(f64::NAN)).is_empty());
    assert_eq!(state.elapsed, Duration::from_secs(10));

    step(&mut state, Intent::Seek(10_000.0));
    assert_eq!(state.elapsed, Duration::from_secs(180));
}

#[test]
fn set_volume_clamps_and_propagates_fraction() {
    let mut state = PlayerState::default();

    let cmds = step(&mut state, Intent::SetVolume(150));
    assert_eq!(state.volume_percent, 100);
    assert_eq!(cmds, vec![MediaCmd::SetVolume(1.0)]);

    let cmds = step(&mut state, Intent::SetVolume(-20));
    assert_eq!(state.volume_percent, 0);
    assert_eq!(cmds, vec![MediaCmd::SetVolume(0.0)]);

    let cmds = step(&mut state, Intent::SetVolume(40));
    assert_eq!(state.volume_percent, 40);
    assert_eq!(cmds, vec![MediaCmd::SetVolume(0.4)]);
}

#[test]
fn toggles_do_not_touch_track_or_media() {
    let mut state = PlayerState {
        current_index: 2,
        ..PlayerState::default()
    };
    assert!(step(&mut state, Intent::ToggleShuffle).is_empty());
    assert!(state.shuffle);
    assert!(step(&mut state, Intent::ToggleLiked).is_empty());
    assert!(state.liked);
    assert_eq!(state.current_index, 2);

    // The like flag is global: changing tracks keeps it.
    step(&mut state, Intent::SelectTrack(0));
    assert!(state.liked);
}

#[test]
fn select_track_keeps_play_state_and_ignores_out_of_range() {
    let mut state = PlayerState {
        is_playing: true,
        ..PlayerState::default()
    };
    step(&mut state, Intent::SelectTrack(3));
    assert_eq!(state.current_index, 3);
    assert!(state.is_playing);

    let generation = state.generation;
    assert!(step(&mut state, Intent::SelectTrack(5)).is_empty());
    assert_eq!(state.current_index, 3);
    assert_eq!(state.generation, generation);
}

#[test]
fn ended_on_last_track_without_repeat_stops() {
    let mut state = PlayerState {
        current_index: 4,
        is_playing: true,
        elapsed: Duration::from_secs(309),
        ..PlayerState::default()
    };
    let generation = state.generation;
    let cmds = step(&mut state, MediaNotice::Ended { generation });
    assert!(cmds.is_empty());
    assert!(!state.is_playing);
    assert_eq!(state.current_index, 4);
    assert_eq!(state.elapsed, Duration::from_secs(310));
}

#[test]
fn ended_on_last_track_with_repeat_all_wraps() {
    let mut state = PlayerState {
        current_index: 4,
        is_playing: true,
        repeat: RepeatMode::All,
        ..PlayerState::default()
    };
    let generation = state.generation;
    let cmds = step(&mut state, MediaNotice::Ended { generation });
    assert_eq!(state.current_index, 0);
    assert!(state.is_playing);
    assert!(matches!(cmds.as_slice(), [MediaCmd::Load { .. }]));
}

#[test]
fn ended_mid_playlist_without_repeat_advances() {
    let mut state = PlayerState {
        current_index: 1,
        is_playing: true,
        ..PlayerState::default()
    };
    let generation = state.generation;
    step(&mut state, MediaNotice::Ended { generation });
    assert_eq!(state.current_index, 2);
    assert!(state.is_playing);
}

#[test]
fn ended_with_repeat_one_restarts_current_track() {
    let mut state = PlayerState {
        current_index: 2,
        is_playing: true,
        repeat: RepeatMode::One,
        elapsed: Duration::from_secs(195),
        ..PlayerState::default()
    };
    let generation = state.generation;
    let cmds = step(&mut state, MediaNotice::Ended { generation });
    assert_eq!(cmds, vec![MediaCmd::Seek(Duration::ZERO), MediaCmd::Play]);
    assert_eq!(state.current_index, 2);
    assert_eq!(state.elapsed, Duration::ZERO);
    assert!(state.is_playing);
    assert_eq!(state.generation, generation);
}

#[test]
fn pause_racing_an_end_notice_stays_paused() {
    let mut view = view();
    view.start();
    view.dispatch(Intent::TogglePlay);
    view.dispatch(Intent::TogglePlay);
    assert!(!view.state().is_playing);

    // The end notice was already in flight when the user paused.
    let ended = view.state().generation;
    view.notify(MediaNotice::Ended { generation: ended });
    assert_eq!(view.state().current_index, 1);
    assert!(!view.state().is_playing);

    let calls_before = view.media().calls.len();
    let loaded = view.state().generation;
    view.notify(MediaNotice::Loaded { generation: loaded });
    assert!(!view.state().is_playing);
    assert_eq!(view.media().calls.len(), calls_before);
}

#[test]
fn repeat_one_end_while_paused_rewinds_without_playing() {
    let mut state = PlayerState {
        current_index: 2,
        repeat: RepeatMode::One,
        elapsed: Duration::from_secs(195),
        ..PlayerState::default()
    };
    let generation = state.generation;
    let cmds = step(&mut state, MediaNotice::Ended { generation });
    assert_eq!(cmds, vec![MediaCmd::Seek(Duration::ZERO)]);
    assert_eq!(state.elapsed, Duration::ZERO);
    assert!(!state.is_playing);
}

#[test]
fn progress_is_mirrored_and_clamped() {
    let mut state = PlayerState::default();
    let generation = state.generation;
    step(
        &mut state,
        MediaNotice::Progress {
            generation,
            position: Duration::from_millis(12_500),
        },
    );
    assert_eq!(state.elapsed, Duration::from_millis(12_500));

    step(
        &mut state,
        MediaNotice::Progress {
            generation,
            position: Duration::from_secs(999),
        },
    );
    assert_eq!(state.elapsed, Duration::from_secs(180));
}

#[test]
fn stale_progress_and_ended_are_ignored() {
    let mut state = PlayerState {
        is_playing: true,
        ..PlayerState::default()
    };
    let old = state.generation;
    step(&mut state, Intent::SelectTrack(1));

    step(
        &mut state,
        MediaNotice::Progress {
            generation: old,
            position: Duration::from_secs(100),
        },
    );
    assert_eq!(state.elapsed, Duration::ZERO);

    assert!(step(&mut state, MediaNotice::Ended { generation: old }).is_empty());
    assert_eq!(state.current_index, 1);
    assert!(state.is_playing);
}

#[test]
fn start_loads_current_track_and_pushes_volume() {
    let mut view = view();
    view.start();
    assert_eq!(
        view.media().calls,
        vec![
            Call::Load(
                "/music/Shadmehr Aghili - Avaz Nemishi [320].mp3".to_string(),
                Generation::default()
            ),
            Call::Volume(0.75),
        ]
    );
}

#[test]
fn toggle_play_issues_play_then_pause() {
    let mut view = view();
    view.dispatch(Intent::TogglePlay);
    assert!(view.state().is_playing);
    view.dispatch(Intent::TogglePlay);
    assert!(!view.state().is_playing);
    assert_eq!(view.media().calls, vec![Call::Play, Call::Pause]);
}

#[test]
fn toggle_play_and_seek_are_dropped_when_media_not_ready() {
    let mut view = PlayerView::with_rng(
        playlist(),
        FakeMedia {
            ready: false,
            calls: Vec::new(),
        },
        PlayerState::default(),
        StdRng::seed_from_u64(3),
    );
    view.dispatch(Intent::TogglePlay);
    view.dispatch(Intent::Seek(30.0));
    assert!(!view.state().is_playing);
    assert_eq!(view.state().elapsed, Duration::ZERO);
    assert!(view.media().calls.is_empty());

    // Volume still goes through; the backend honours it once it comes up.
    view.dispatch(Intent::SetVolume(20));
    assert_eq!(view.media().calls, vec![Call::Volume(0.2)]);
}

#[test]
fn loaded_autoplays_only_while_playing() {
    let mut view = view();
    view.start();
    let generation = view.state().generation;
    view.notify(MediaNotice::Loaded { generation });
    assert!(!view.media().calls.contains(&Call::Play));

    view.dispatch(Intent::TogglePlay);
    view.dispatch(Intent::NextTrack);
    let generation = view.state().generation;
    view.notify(MediaNotice::Loaded { generation });
    assert_eq!(view.media().calls.last(), Some(&Call::Play));
}

#[test]
fn stale_loaded_after_switching_track_issues_no_play() {
    let mut view = view();
    view.start();
    view.dispatch(Intent::TogglePlay);

    // Track A (index 0) is loading; the user picks track B before it finishes.
    let track_a = view.state().generation;
    view.dispatch(Intent::SelectTrack(1));
    let track_b = view.state().generation;
    assert_ne!(track_a, track_b);

    let calls_before = view.media().calls.len();
    view.notify(MediaNotice::Loaded { generation: track_a });
    assert_eq!(view.media().calls.len(), calls_before);

    view.notify(MediaNotice::Loaded { generation: track_b });
    assert_eq!(view.media().calls.len(), calls_before + 1);
    assert_eq!(view.media().calls.last(), Some(&Call::Play));
}

#[test]
fn view_sanitises_initial_state() {
    let view = PlayerView::with_rng(
        playlist(),
        FakeMedia::ready(),
        PlayerState {
            current_index: 17,
            volume_percent: 250,
            ..PlayerState::default()
        },
        StdRng::seed_from_u64(5),
    );
    assert_eq!(view.state().current_index, 0);
    assert_eq!(view.state().volume_percent, 100);
    assert_eq!(view.current_track().id, 1);
}

#[test]
fn single_track_playlist_shuffle_always_picks_it() {
    let playlist = Playlist::new(vec![Track::new(
        9,
        "Only",
        "One",
        60,
        "/img/o.jpg",
        "/music/o.mp3",
        "from-red-500 to-orange-500",
    )])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut state = PlayerState {
        shuffle: true,
        ..PlayerState::default()
    };
    for _ in 0..10 {
        update(&mut state, &playlist, Intent::NextTrack.into(), &mut rng);
        assert_eq!(state.current_index, 0);
    }
}

#[test]
fn progress_notice_through_view_moves_elapsed() {
    let mut view = view();
    view.start();
    let generation = view.state().generation;
    view.notify(MediaNotice::Progress {
        generation,
        position: Duration::from_secs(2),
    });
    assert_eq!(view.state().elapsed, Duration::from_secs(2));
}
