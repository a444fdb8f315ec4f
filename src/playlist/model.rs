use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

/// A single playable song entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub duration: Duration,
    /// Reference to the cover image (path under the media root).
    pub cover: String,
    /// Locator handed to the media backend when the track is loaded.
    pub media_ref: String,
    /// Tailwind-style gradient, e.g. `from-purple-500 to-pink-500`.
    pub gradient: String,
}

impl Track {
    pub fn new(
        id: u32,
        title: &str,
        artist: &str,
        duration_secs: u64,
        cover: &str,
        media_ref: &str,
        gradient: &str,
    ) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            artist: artist.trim().to_string(),
            duration: Duration::from_secs(duration_secs),
            cover: cover.trim().to_string(),
            media_ref: media_ref.trim().to_string(),
            gradient: gradient.trim().to_string(),
        }
    }

    /// `"Title - Artist"`, or just the title when the artist is blank.
    pub fn display(&self) -> String {
        if self.artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("playlist must contain at least one track")]
    Empty,
    #[error("duplicate track id {0}")]
    DuplicateId(u32),
    #[error("track {0} has a zero duration")]
    ZeroDuration(u32),
}

/// Ordered, immutable sequence of tracks. Never empty.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Validate and wrap `tracks`.
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }

        let mut seen = HashSet::new();
        for t in &tracks {
            if !seen.insert(t.id) {
                return Err(PlaylistError::DuplicateId(t.id));
            }
            if t.duration.is_zero() {
                return Err(PlaylistError::ZeroDuration(t.id));
            }
        }

        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at `index`. Callers only pass indices derived from this playlist.
    pub fn track(&self, index: usize) -> &Track {
        debug_assert!(index < self.tracks.len(), "track index {index} out of range");
        &self.tracks[index]
    }

    pub fn last_index(&self) -> usize {
        self.tracks.len() - 1
    }

    /// Index after `current`, wrapping to the start.
    pub fn next_index(&self, current: usize) -> usize {
        (current + 1) % self.tracks.len()
    }

    /// Index before `current`, wrapping to the end.
    pub fn prev_index(&self, current: usize) -> usize {
        (current + self.tracks.len() - 1) % self.tracks.len()
    }
}
