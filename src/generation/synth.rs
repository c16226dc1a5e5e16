//! Sine-wave sample synthesis.
//!
//! Every note restarts its sine at phase zero: sample `i` of a note is
//! `amplitude * sin(2π * frequency * i / sample_rate)`, truncated toward zero
//! into an `i16`. Rests (frequency 0) go through the same formula and come
//! out as silence. Runs are concatenated with no crossfade.

use std::f64::consts::PI;

use crate::error::{ErrorCode, JingleError, Result};
use crate::types::{AudioStreamParameters, Note, Song};

/// Returns the samples of a single note.
pub fn note_samples(note: Note, params: &AudioStreamParameters) -> impl Iterator<Item = i16> {
    let count = params.samples_for_duration(note.duration_ms);
    let sample_rate = f64::from(params.sample_rate);
    let amplitude = f64::from(params.amplitude);
    let angular = 2.0 * PI * f64::from(note.frequency_hz);

    (0..count).map(move |i| {
        let t = i as f64 / sample_rate;
        // `as` truncates toward zero and saturates at the i16 bounds
        (amplitude * (angular * t).sin()) as i16
    })
}

/// Returns a lazy stream of every sample in the song, in playback order.
///
/// Used by the WAV writer so the whole buffer never has to be held in memory.
pub fn samples<'a>(
    song: &'a Song,
    params: &'a AudioStreamParameters,
) -> impl Iterator<Item = i16> + 'a {
    song.notes()
        .iter()
        .flat_map(move |note| note_samples(*note, params))
}

/// Synthesizes the whole song into a sample buffer.
///
/// Pure and deterministic: the same song and parameters always produce the
/// same samples.
///
/// # Example
///
/// ```ignore
/// use jingle::generation::synthesize;
/// use jingle::types::{AudioStreamParameters, Note, Song};
///
/// let song = Song::single(Note::new(440, 200));
/// let buffer = synthesize(&song, &AudioStreamParameters::default());
/// assert_eq!(buffer.len(), 8820);
/// ```
pub fn synthesize(song: &Song, params: &AudioStreamParameters) -> Vec<i16> {
    samples(song, params).collect()
}

/// Total number of samples (per channel) the song renders to.
///
/// Fails with STREAM_TOO_LONG if the count does not fit a `u64`.
pub fn total_samples(song: &Song, params: &AudioStreamParameters) -> Result<u64> {
    song.notes()
        .iter()
        .try_fold(0u64, |total, note| {
            total.checked_add(params.samples_for_duration(note.duration_ms))
        })
        .ok_or_else(|| {
            JingleError::new(ErrorCode::StreamTooLong, "Sample count overflows a 64-bit counter")
        })
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: u64, sample_rate: u32) -> f64 {
    sample_count as f64 / f64::from(sample_rate)
}
