//! Commands understood by the audio thread.

use std::path::PathBuf;
use std::time::Duration;

use crate::player::Generation;

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current sink with a paused one for `path`.
    Load { path: PathBuf, generation: Generation },
    Play,
    Pause,
    /// Jump to an absolute position in the current track.
    Seek(Duration),
    /// Volume fraction applied to the current and all later sinks.
    SetVolume(f32),
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
