//! AudioStreamParameters type describing the rendered PCM stream.
//!
//! Sample rate, depth, channel layout and loudness are explicit parameters
//! with defaults matching the classic 44.1kHz mono 16-bit output.

use serde::{Deserialize, Serialize};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// The only supported sample depth.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Default peak sample magnitude. Leaves headroom below `i16::MAX`.
pub const DEFAULT_AMPLITUDE: u32 = 16000;

/// How a note's duration is converted into a whole number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SampleCountPolicy {
    /// `floor(sample_rate * duration_ms / 1000)`.
    ///
    /// Fractional samples are dropped per note, so long songs drift slightly
    /// short of their nominal length. Output is bit-exact with the classic
    /// renderer.
    #[default]
    Truncate,

    /// Nearest whole sample, halves rounding up.
    Round,
}

impl SampleCountPolicy {
    /// Returns the string representation of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleCountPolicy::Truncate => "truncate",
            SampleCountPolicy::Round => "round",
        }
    }
}

/// Parameters of the PCM stream written to the WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamParameters {
    /// Samples per second.
    pub sample_rate: u32,

    /// Bits per sample. Must be 16.
    pub bits_per_sample: u16,

    /// Channel count written to the header. The synthesized voice is mono;
    /// with more than one channel each sample is repeated on every channel.
    pub channel_count: u16,

    /// Peak sample magnitude. Must stay below `2^(bits_per_sample - 1)`.
    pub amplitude: u32,

    /// Duration to sample-count conversion.
    pub sample_count_policy: SampleCountPolicy,
}

impl AudioStreamParameters {
    /// Creates mono 16-bit parameters at the given rate and amplitude.
    pub fn new(sample_rate: u32, amplitude: u32) -> Self {
        Self {
            sample_rate,
            amplitude,
            ..Self::default()
        }
    }

    /// Number of samples rendered for a note of `duration_ms`.
    pub fn samples_for_duration(&self, duration_ms: u32) -> u64 {
        let scaled = u64::from(self.sample_rate) * u64::from(duration_ms);
        match self.sample_count_policy {
            SampleCountPolicy::Truncate => scaled / 1000,
            SampleCountPolicy::Round => (scaled + 500) / 1000,
        }
    }

    /// Bytes per sample on a single channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame (one sample on every channel).
    pub fn block_align(&self) -> u16 {
        self.channel_count * self.bytes_per_sample()
    }

    /// Bytes of audio data per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    /// Largest sample magnitude the depth can hold without clipping.
    pub fn max_amplitude(&self) -> u32 {
        1u32.checked_shl(u32::from(self.bits_per_sample.saturating_sub(1)))
            .map_or(u32::MAX, |limit| limit - 1)
    }

    /// Validates the parameters.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }

        if self.bits_per_sample != BITS_PER_SAMPLE {
            return Some(format!(
                "bits_per_sample must be {}, got {}",
                BITS_PER_SAMPLE, self.bits_per_sample
            ));
        }

        if !(1..=2).contains(&self.channel_count) {
            return Some(format!(
                "channel_count must be 1 or 2, got {}",
                self.channel_count
            ));
        }

        if self.amplitude > self.max_amplitude() {
            return Some(format!(
                "amplitude {} would clip (maximum {})",
                self.amplitude,
                self.max_amplitude()
            ));
        }

        // byte_rate must fit the 32-bit header field
        if u64::from(self.sample_rate) * u64::from(self.block_align()) > u64::from(u32::MAX) {
            return Some(format!("sample_rate {} is too high", self.sample_rate));
        }

        None
    }
}

impl Default for AudioStreamParameters {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bits_per_sample: BITS_PER_SAMPLE,
            channel_count: 1,
            amplitude: DEFAULT_AMPLITUDE,
            sample_count_policy: SampleCountPolicy::Truncate,
        }
    }
}
