//! Player state types: `PlayerState`, `RepeatMode` and load `Generation`s.

use std::time::Duration;

/// What happens when the current track reaches its end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Advance until the last track, then stop.
    #[default]
    Off,
    /// Restart the current track.
    One,
    /// Advance and wrap around to the first track.
    All,
}

impl RepeatMode {
    /// The next mode in the `Off -> One -> All -> Off` cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::One,
            Self::One => Self::All,
            Self::All => Self::Off,
        }
    }
}

/// Tag attached to every load request so late notifications from a
/// superseded load can be recognised and dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// All mutable player state. Owned by `PlayerView`, changed only by `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    pub is_playing: bool,
    /// Position in the current track, never beyond its duration.
    pub elapsed: Duration,
    pub volume_percent: u8,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    /// One flag for the whole player, not per track.
    pub liked: bool,
    /// Generation of the most recent load request.
    pub generation: Generation,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            elapsed: Duration::ZERO,
            volume_percent: 75,
            shuffle: false,
            repeat: RepeatMode::Off,
            liked: false,
            generation: Generation::default(),
        }
    }
}

/// Map a `0..=100` percentage onto the `0.0..=1.0` range the backend expects.
pub fn volume_fraction(percent: u8) -> f32 {
    f32::from(percent.min(100)) / 100.0
}
