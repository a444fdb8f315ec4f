use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{trace, warn};

use crate::config::MediaSettings;
use crate::player::{Generation, MediaHandle, MediaNotice};

use super::sink::resolve_media_path;
use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// Handle to the audio thread. Notifications go to the `Sender` passed to
/// [`RodioMedia::new`].
pub struct RodioMedia {
    tx: Sender<AudioCmd>,
    ready: Arc<AtomicBool>,
    root: PathBuf,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl RodioMedia {
    pub fn new(settings: &MediaSettings, notices: Sender<MediaNotice>) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let ready = Arc::new(AtomicBool::new(false));

        let audio_handle = spawn_audio_thread(rx, notices, ready.clone(), settings.clone());

        Self {
            tx,
            ready,
            root: settings.root.clone(),
            join: Mutex::new(Some(audio_handle)),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            trace!(cmd = ?e.0, "audio thread is gone, dropping command");
        }
    }

    /// Fade out, stop the audio thread and wait for it to exit.
    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                join_audio_thread(h);
            }
        }
    }
}

/// Wait for the audio thread. Returns `false`, after logging, if it panicked.
pub(super) fn join_audio_thread(handle: JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(_) => {
            warn!("audio thread panicked");
            false
        }
    }
}

impl MediaHandle for RodioMedia {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn load(&mut self, media_ref: &str, generation: Generation) {
        let path = resolve_media_path(&self.root, media_ref);
        self.send(AudioCmd::Load { path, generation });
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.send(AudioCmd::Seek(position));
    }

    fn set_volume(&mut self, fraction: f32) {
        self.send(AudioCmd::SetVolume(fraction));
    }
}
