//! Note and Song types.
//!
//! A Song is an ordered list of Notes. Both are immutable once built; songs
//! come either from the static tables in [`crate::songs`] or from JSON files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, JingleError, Result};

/// A single tone: a frequency held for a duration.
///
/// A frequency of 0 is a rest. It is rendered by the same sine formula as
/// every other note, which yields silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Pitch in Hz. 0 means silence.
    pub frequency_hz: u32,
    /// Length in milliseconds.
    pub duration_ms: u32,
}

impl Note {
    /// Creates a sounding note.
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Creates a rest of the given length.
    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(0, duration_ms)
    }

    /// Returns true if this note is silent.
    pub fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// An ordered sequence of notes, in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Song {
    notes: Vec<Note>,
}

impl Song {
    /// Creates a song from a list of notes.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Creates a song holding a single note.
    pub fn single(note: Note) -> Self {
        Self { notes: vec![note] }
    }

    /// Parses a song from a JSON array of notes.
    ///
    /// ```ignore
    /// let song = Song::from_json_str(r#"[{"frequency_hz": 440, "duration_ms": 200}]"#)?;
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let song: Song = serde_json::from_str(json).map_err(|e| {
            JingleError::with_source(
                ErrorCode::InvalidSong,
                format!("Invalid song: malformed JSON: {}", e),
                e,
            )
        })?;

        if song.is_empty() {
            return Err(JingleError::invalid_song("song has no notes"));
        }

        Ok(song)
    }

    /// Loads a song from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            JingleError::with_source(
                ErrorCode::InvalidSong,
                format!("Invalid song: cannot read {}: {}", path.display(), e),
                e,
            )
        })?;
        log::debug!("Loaded {} bytes of song data from {}", json.len(), path.display());
        Self::from_json_str(&json)
    }

    /// Returns the notes in playback order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes, rests included.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the song has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Nominal length of the song in milliseconds.
    ///
    /// The rendered audio can be slightly shorter, since each note's sample
    /// count is truncated separately.
    pub fn duration_ms(&self) -> u64 {
        self.notes.iter().map(|n| u64::from(n.duration_ms)).sum()
    }
}

impl From<&[Note]> for Song {
    fn from(notes: &[Note]) -> Self {
        Self::new(notes.to_vec())
    }
}

impl<'a> IntoIterator for &'a Song {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
