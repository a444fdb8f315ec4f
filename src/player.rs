//! Player core: state, events, the transition function and `PlayerView`.
//!
//! Every user intent and every media notification goes through
//! [`update`], which mutates [`PlayerState`] and returns the media commands
//! to issue. [`PlayerView`] pairs that function with a [`MediaHandle`] and
//! executes the commands in order.

mod event;
mod handle;
mod state;
mod update;
mod view;

pub use event::*;
pub use handle::MediaHandle;
pub use state::*;
pub use update::{initial_commands, update};
pub use view::PlayerView;

#[cfg(test)]
mod tests;
