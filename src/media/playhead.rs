//! Position and end-of-track bookkeeping for the audio thread.
//!
//! The sink does not report its position, so the thread keeps its own clock:
//! time played before the last resume plus the running stretch since then.
//! Every method takes `now` so the clock can be driven from tests.

use std::time::{Duration, Instant};

/// What a periodic check should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tick {
    Progress(Duration),
    Ended,
}

#[derive(Debug)]
pub(super) struct Playhead {
    paused: bool,
    /// Set once the sink drained; cleared by a rewind.
    ended: bool,
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Playhead {
    pub(super) fn new() -> Self {
        Self {
            paused: true,
            ended: false,
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }

    pub(super) fn is_paused(&self) -> bool {
        self.paused
    }

    pub(super) fn has_ended(&self) -> bool {
        self.ended
    }

    pub(super) fn elapsed(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |st| now.saturating_duration_since(st))
    }

    /// Back to a paused clock at zero.
    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Start the clock. Returns `false` when it was already running.
    pub(super) fn resume(&mut self, now: Instant) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        self.started_at = Some(now);
        true
    }

    /// Stop the clock. Returns `false` when it was already stopped.
    pub(super) fn pause(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        self.accumulated = self.elapsed(now);
        self.started_at = None;
        self.paused = true;
        true
    }

    /// Jump to `position` keeping the paused or running state.
    pub(super) fn rewind_to(&mut self, position: Duration, now: Instant) {
        self.accumulated = position;
        self.started_at = (!self.paused).then_some(now);
        self.ended = false;
    }

    /// Decide what a periodic check reports. Nothing while paused, so the
    /// end is reported exactly once per playthrough.
    pub(super) fn tick(&mut self, drained: bool, now: Instant) -> Option<Tick> {
        if self.paused {
            return None;
        }
        if drained {
            self.pause(now);
            self.ended = true;
            Some(Tick::Ended)
        } else {
            Some(Tick::Progress(self.elapsed(now)))
        }
    }
}
