//! Audio output module.
//!
//! Provides WAV file writing for synthesized audio.

pub mod wav;

// Re-export commonly used items
pub use wav::{file_size_for, write_wav, write_wav_to_buffer, WavSummary, HEADER_SIZE};
