//! rodio-backed implementation of the player's `MediaHandle`.
//!
//! Playback runs on a dedicated audio thread that owns the output stream and
//! the current `Sink`. `RodioMedia` forwards commands to it over a channel;
//! the thread reports back through `MediaNotice` messages.

mod error;
mod handle;
mod playhead;
mod sink;
mod thread;
mod types;

pub use error::MediaError;
pub use handle::RodioMedia;
