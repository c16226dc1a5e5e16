//! Audio generation module.
//!
//! Provides the sine synthesizer that turns a song into PCM samples.

pub mod synth;

// Re-export commonly used items
pub use synth::{note_samples, samples, samples_to_duration, synthesize, total_samples};
