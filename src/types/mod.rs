//! Core types for jingle.
//!
//! This module re-exports all the core data types:
//! - [`Note`] and [`Song`]: the melody being rendered
//! - [`AudioStreamParameters`]: sample rate, depth, channels and loudness
//! - [`SessionReport`]: the summary of a finished render

mod note;
mod report;
mod stream;

// Re-export all types at the module level
pub use note::{Note, Song};
pub use report::{PlaybackOutcome, SessionReport};
pub use stream::{
    AudioStreamParameters, SampleCountPolicy, BITS_PER_SAMPLE, DEFAULT_AMPLITUDE,
    DEFAULT_SAMPLE_RATE,
};
