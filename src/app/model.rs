//! Application model: `App`.
//!
//! Nothing here affects playback. The runtime turns cursor positions into
//! `Intent::SelectTrack` when the user confirms a row.

use rand::Rng;

/// Bar height while playing is drawn from this range.
pub const VISUALIZER_PLAYING: std::ops::RangeInclusive<u64> = 10..=50;
/// Bar height while paused.
pub const VISUALIZER_IDLE: u64 = 4;
/// Upper bound used when scaling the bars.
pub const VISUALIZER_MAX: u64 = 50;

/// The UI model.
pub struct App {
    /// Playlist row under the cursor.
    pub cursor: usize,
    track_count: usize,

    /// When set, the cursor jumps to the current track whenever it changes.
    pub follow_current: bool,
    pub metadata_window: bool,

    /// One height per visualizer bar.
    pub levels: Vec<u64>,
}

impl App {
    /// Create a new `App` for a playlist of `track_count` tracks.
    pub fn new(track_count: usize, bars: usize) -> Self {
        Self {
            cursor: 0,
            track_count,
            follow_current: true,
            metadata_window: false,
            levels: vec![VISUALIZER_IDLE; bars],
        }
    }

    pub fn toggle_metadata_window(&mut self) {
        self.metadata_window = !self.metadata_window;
    }

    /// Enable follow mode (cursor tracks the current track).
    pub fn follow_current_on(&mut self) {
        self.follow_current = true;
    }

    /// Disable follow mode.
    pub fn follow_current_off(&mut self) {
        self.follow_current = false;
    }

    /// Move the cursor to `current` if follow mode is on.
    pub fn sync_cursor(&mut self, current: usize) {
        if self.follow_current && self.cursor != current {
            self.set_cursor(current);
        }
    }

    /// Put the cursor on `idx`; out-of-range rows are ignored.
    pub fn set_cursor(&mut self, idx: usize) {
        if idx < self.track_count {
            self.cursor = idx;
        }
    }

    /// Move the cursor down one row, wrapping to the top.
    pub fn next(&mut self) {
        if self.track_count > 0 {
            self.cursor = (self.cursor + 1) % self.track_count;
        }
    }

    /// Move the cursor up one row, wrapping to the bottom.
    pub fn prev(&mut self) {
        if self.track_count > 0 {
            self.cursor = (self.cursor + self.track_count - 1) % self.track_count;
        }
    }

    pub fn top(&mut self) {
        self.cursor = 0;
    }

    pub fn bottom(&mut self) {
        self.cursor = self.track_count.saturating_sub(1);
    }

    /// Re-roll the bar heights while playing; flatten them otherwise.
    pub fn refresh_visualizer<R: Rng>(&mut self, playing: bool, rng: &mut R) {
        for level in &mut self.levels {
            *level = if playing {
                rng.gen_range(VISUALIZER_PLAYING)
            } else {
                VISUALIZER_IDLE
            };
        }
    }
}
