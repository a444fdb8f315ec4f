use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use crate::config::MediaSettings;
use crate::player::{Generation, MediaNotice};

use super::error::MediaError;
use super::playhead::{Playhead, Tick};
use super::sink::create_sink_at;
use super::types::AudioCmd;

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    notices: Sender<MediaNotice>,
    ready: Arc<AtomicBool>,
    settings: MediaSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                // Stay not-ready; every request is dropped from here on.
                error!(error = %MediaError::from(e), "audio backend unavailable");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);
        ready.store(true, Ordering::Release);
        info!("audio output stream opened");

        let interval = Duration::from_millis(settings.progress_interval_ms.max(1));
        let mut deck = Deck::new(
            |path: &Path, start_at: Duration, volume: f32| {
                create_sink_at(&stream, path, start_at, volume)
            },
            notices,
        );
        let mut last_tick = Instant::now();

        loop {
            let wait = interval.saturating_sub(last_tick.elapsed());
            match rx.recv_timeout(wait) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    deck.fade_out(fade_out_ms);
                    break;
                }
                Ok(cmd) => deck.handle(cmd),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            // Commands can arrive faster than the interval; tick on schedule anyway.
            if last_tick.elapsed() >= interval {
                deck.tick();
                last_tick = Instant::now();
            }
        }
        debug!("audio thread exiting");
    })
}

/// Everything the audio thread knows about the loaded track.
///
/// `open` builds a paused sink for a path, a start position and a volume.
pub(super) struct Deck<F> {
    open: F,
    notices: Sender<MediaNotice>,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    generation: Option<Generation>,
    head: Playhead,
    volume: f32,
}

impl<F> Deck<F>
where
    F: Fn(&Path, Duration, f32) -> Result<Sink, MediaError>,
{
    pub(super) fn new(open: F, notices: Sender<MediaNotice>) -> Self {
        Self {
            open,
            notices,
            sink: None,
            path: None,
            generation: None,
            head: Playhead::new(),
            volume: 1.0,
        }
    }

    pub(super) fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Load { path, generation } => self.load(path, generation),
            AudioCmd::Play => self.play(),
            AudioCmd::Pause => self.pause(),
            AudioCmd::Seek(position) => self.seek(position),
            AudioCmd::SetVolume(fraction) => self.set_volume(fraction),
            AudioCmd::Quit { .. } => {}
        }
    }

    fn notify(&self, notice: MediaNotice) {
        // The UI side going away just means we are shutting down.
        let _ = self.notices.send(notice);
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.head.reset();
    }

    fn load(&mut self, path: PathBuf, generation: Generation) {
        self.stop();
        self.generation = Some(generation);

        match (self.open)(&path, Duration::ZERO, self.volume) {
            Ok(sink) => {
                info!(path = %path.display(), generation = generation.value(), "track loaded");
                self.sink = Some(sink);
                self.path = Some(path);
                self.notify(MediaNotice::Loaded { generation });
            }
            Err(e) => {
                // Never signals Loaded: the player just stays "not yet playing".
                warn!(error = %e, generation = generation.value(), "failed to load track");
                self.path = None;
            }
        }
    }

    fn play(&mut self) {
        if self.head.has_ended() {
            // Like a media element: playing a finished track starts it over.
            self.rebuild_at(Duration::ZERO);
        }
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if self.head.resume(Instant::now()) {
            sink.play();
        }
    }

    fn pause(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if self.head.pause(Instant::now()) {
            sink.pause();
        }
    }

    fn seek(&mut self, position: Duration) {
        if self.sink.is_none() {
            return;
        }
        self.rebuild_at(position);
        if !self.head.is_paused() {
            if let Some(sink) = self.sink.as_ref() {
                sink.play();
            }
        }
    }

    /// Replace the sink with a fresh paused one positioned at `position`.
    /// The clock keeps its paused or running state.
    fn rebuild_at(&mut self, position: Duration) {
        let Some(path) = self.path.clone() else {
            return;
        };
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        match (self.open)(&path, position, self.volume) {
            Ok(sink) => {
                self.sink = Some(sink);
                self.head.rewind_to(position, Instant::now());
            }
            Err(e) => {
                warn!(error = %e, "failed to reopen track for seeking");
                self.path = None;
                self.head.reset();
            }
        }
    }

    fn set_volume(&mut self, fraction: f32) {
        self.volume = fraction.clamp(0.0, 1.0);
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.volume);
        }
    }

    /// Periodic check: report progress, or the end of the track exactly once.
    pub(super) fn tick(&mut self) {
        let (Some(sink), Some(generation)) = (self.sink.as_ref(), self.generation) else {
            return;
        };
        match self.head.tick(sink.empty(), Instant::now()) {
            Some(Tick::Ended) => {
                debug!(generation = generation.value(), "track ended");
                self.notify(MediaNotice::Ended { generation });
            }
            Some(Tick::Progress(position)) => {
                self.notify(MediaNotice::Progress {
                    generation,
                    position,
                });
            }
            None => {}
        }
    }

    pub(super) fn fade_out(&mut self, fade_out_ms: u64) {
        if let Some(sink) = self.sink.as_ref() {
            if fade_out_ms > 0 && !self.head.is_paused() {
                let steps: u64 = 20;
                let step_ms = (fade_out_ms / steps).max(1);
                for step in 1..=steps {
                    let t = step as f32 / steps as f32;
                    sink.set_volume(self.volume * (1.0 - t));
                    thread::sleep(Duration::from_millis(step_ms));
                }
            }
            sink.set_volume(0.0);
        }
        self.stop();
    }
}
