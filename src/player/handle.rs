use std::time::Duration;

use super::state::Generation;

/// The playback primitive driven by `PlayerView`.
///
/// Every call is fire-and-forget: implementations return immediately and
/// report back through `MediaNotice` messages tagged with the generation
/// passed to [`MediaHandle::load`].
pub trait MediaHandle {
    /// Whether the backend can accept play/pause/seek requests yet.
    fn is_ready(&self) -> bool;
    /// Start preparing `media_ref`; signals `Loaded` with `generation` when ready.
    fn load(&mut self, media_ref: &str, generation: Generation);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, position: Duration);
    /// Volume as a fraction in `0.0..=1.0`. Honoured by all later playback.
    fn set_volume(&mut self, fraction: f32);
}
