use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::playlist::{Playlist, Track};

use super::event::{Intent, MediaCmd, MediaNotice, PlayerEvent};
use super::handle::MediaHandle;
use super::state::PlayerState;
use super::update::{initial_commands, update};

/// Owns the player state and the media handle; the only place media
/// commands are issued from.
pub struct PlayerView<M> {
    playlist: Playlist,
    state: PlayerState,
    media: M,
    rng: StdRng,
}

impl<M: MediaHandle> PlayerView<M> {
    pub fn new(playlist: Playlist, media: M, initial: PlayerState) -> Self {
        Self::with_rng(playlist, media, initial, StdRng::from_entropy())
    }

    /// Like [`PlayerView::new`] with a caller-provided shuffle rng.
    pub fn with_rng(playlist: Playlist, media: M, initial: PlayerState, rng: StdRng) -> Self {
        let mut state = initial;
        if state.current_index >= playlist.len() {
            state.current_index = 0;
        }
        state.elapsed = state
            .elapsed
            .min(playlist.track(state.current_index).duration);
        state.volume_percent = state.volume_percent.min(100);

        Self {
            playlist,
            state,
            media,
            rng,
        }
    }

    /// Load the current track and push the initial volume.
    pub fn start(&mut self) {
        let cmds = initial_commands(&self.state, &self.playlist);
        self.execute(cmds);
    }

    /// Handle a user intent.
    pub fn dispatch(&mut self, intent: Intent) {
        if intent.requires_media() && !self.media.is_ready() {
            debug!(?intent, "media not ready, dropping intent");
            return;
        }
        self.apply(intent.into());
    }

    /// Handle a notification from the media backend.
    pub fn notify(&mut self, notice: MediaNotice) {
        self.apply(notice.into());
    }

    fn apply(&mut self, event: PlayerEvent) {
        debug!(?event, "player event");
        let cmds = update(&mut self.state, &self.playlist, event, &mut self.rng);
        self.execute(cmds);
    }

    fn execute(&mut self, cmds: Vec<MediaCmd>) {
        for cmd in cmds {
            debug!(?cmd, "media command");
            match cmd {
                MediaCmd::Load {
                    media_ref,
                    generation,
                } => self.media.load(&media_ref, generation),
                MediaCmd::Play => self.media.play(),
                MediaCmd::Pause => self.media.pause(),
                MediaCmd::Seek(position) => self.media.seek(position),
                MediaCmd::SetVolume(fraction) => self.media.set_volume(fraction),
            }
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.track(self.state.current_index)
    }

    pub fn media(&self) -> &M {
        &self.media
    }
}
