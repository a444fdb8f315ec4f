use std::time::Duration;

use super::state::Generation;

/// User intents coming from the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    TogglePlay,
    SelectTrack(usize),
    NextTrack,
    PreviousTrack,
    /// Jump to an absolute position in seconds.
    Seek(f64),
    /// Set the volume in percent; clamped to `0..=100`.
    SetVolume(i32),
    ToggleShuffle,
    CycleRepeat,
    ToggleLiked,
}

impl Intent {
    /// Intents that are dropped outright while the media backend is not ready.
    pub fn requires_media(&self) -> bool {
        matches!(self, Self::TogglePlay | Self::Seek(_))
    }
}

/// Notifications emitted by the media backend.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaNotice {
    /// Periodic playback position report.
    Progress {
        generation: Generation,
        position: Duration,
    },
    /// The track reached its natural end (once per playthrough).
    Ended { generation: Generation },
    /// A load request finished and the track is ready to play.
    Loaded { generation: Generation },
}

impl MediaNotice {
    pub fn generation(&self) -> Generation {
        match self {
            Self::Progress { generation, .. }
            | Self::Ended { generation }
            | Self::Loaded { generation } => *generation,
        }
    }
}

/// Anything that can change player state.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Intent(Intent),
    Media(MediaNotice),
}

impl From<Intent> for PlayerEvent {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

impl From<MediaNotice> for PlayerEvent {
    fn from(notice: MediaNotice) -> Self {
        Self::Media(notice)
    }
}

/// Side effects produced by a transition, executed against the media handle.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCmd {
    Load {
        media_ref: String,
        generation: Generation,
    },
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f32),
}
