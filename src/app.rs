//! Application module: exposes the UI-only model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playlist cursor, the
//! follow-current mode, the metadata popup flag and the visualizer levels.
//! Player state itself lives in `player::PlayerView`.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
