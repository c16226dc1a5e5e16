//! SessionReport type describing one finished render.
//!
//! The report is what the binary prints with `--json`: where the file went,
//! how much audio it holds, and what happened when playback was attempted.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened when the rendered file was handed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum PlaybackOutcome {
    /// The player ran and exited successfully.
    Played,
    /// Playback was disabled.
    Skipped,
    /// Playback was attempted and failed. Never fatal.
    Failed(String),
}

impl PlaybackOutcome {
    /// Returns true if the file was played.
    pub fn is_played(&self) -> bool {
        matches!(self, PlaybackOutcome::Played)
    }
}

/// Summary of a rendered WAV file and its playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Full filesystem path to the WAV file.
    pub path: PathBuf,

    /// Audio sample rate in Hz.
    pub sample_rate: u32,

    /// Channels written to the file.
    pub channel_count: u16,

    /// Notes in the song, rests included.
    pub note_count: usize,

    /// Samples per channel.
    pub total_samples: u64,

    /// Length of the rendered audio in seconds.
    pub duration_sec: f64,

    /// Size of the file on disk, header included.
    pub file_size: u64,

    /// Time taken to synthesize and write the file in seconds.
    pub render_time_sec: f32,

    /// Result of handing the file to the player.
    pub playback: PlaybackOutcome,
}
