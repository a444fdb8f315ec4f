//! Playlist module: the fixed, ordered list of tracks the player can address.
//!
//! Tracks are built once at startup and never change afterwards; the index
//! into the playlist is the only addressing scheme the player uses.

mod builtin;
mod display;
mod model;

pub use builtin::builtin_tracks;
pub use display::format_time;
pub use model::*;
