//! Runtime configuration.
//!
//! Contains the output path, the audio stream parameters and the player
//! selection. Values come from defaults, then `JINGLE_*` environment
//! variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{AudioStreamParameters, SampleCountPolicy};

/// File written when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "jingle_bells.wav";

/// Which player receives the rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerChoice {
    /// The host's stock player (`afplay` on macOS, `aplay` on Linux).
    #[default]
    Auto,

    /// Do not play the file.
    Off,

    /// A specific program, run as `<program> <path>`.
    Program(String),
}

impl PlayerChoice {
    /// Parses a player choice from a string.
    ///
    /// `auto` and `none`/`off` are keywords; anything else names a program.
    /// Returns None for an empty string.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" => None,
            "auto" => Some(PlayerChoice::Auto),
            "none" | "off" => Some(PlayerChoice::Off),
            _ => Some(PlayerChoice::Program(s.to_string())),
        }
    }
}

impl std::fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerChoice::Auto => write!(f, "auto"),
            PlayerChoice::Off => write!(f, "none"),
            PlayerChoice::Program(program) => write!(f, "{}", program),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JingleConfig {
    /// Where to write the WAV file.
    /// If None, uses [`DEFAULT_OUTPUT`] in the current directory.
    pub output_path: Option<PathBuf>,

    /// Parameters of the rendered PCM stream.
    pub stream: AudioStreamParameters,

    /// Player for the finished file.
    pub player: PlayerChoice,
}

impl JingleConfig {
    /// Creates a new JingleConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a JingleConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `JINGLE_OUTPUT` - Output WAV path
    /// - `JINGLE_SAMPLE_RATE` - Sample rate in Hz
    /// - `JINGLE_AMPLITUDE` - Peak sample magnitude (below 32768)
    /// - `JINGLE_CHANNELS` - Channel count (1 or 2)
    /// - `JINGLE_ROUND_DURATIONS` - `1`/`true` to round note lengths instead of truncating
    /// - `JINGLE_PLAYER` - `auto`, `none` or a program name
    ///
    /// Falls back to defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("JINGLE_OUTPUT") {
            if !path.is_empty() {
                config.output_path = Some(PathBuf::from(path));
            }
        }

        if let Some(rate_str) = lookup("JINGLE_SAMPLE_RATE") {
            if let Ok(rate) = rate_str.parse::<u32>() {
                if rate > 0 {
                    config.stream.sample_rate = rate;
                }
            }
        }

        if let Some(amplitude_str) = lookup("JINGLE_AMPLITUDE") {
            if let Ok(amplitude) = amplitude_str.parse::<u32>() {
                if amplitude <= config.stream.max_amplitude() {
                    config.stream.amplitude = amplitude;
                }
            }
        }

        if let Some(channels_str) = lookup("JINGLE_CHANNELS") {
            if let Ok(channels) = channels_str.parse::<u16>() {
                if (1..=2).contains(&channels) {
                    config.stream.channel_count = channels;
                }
            }
        }

        if let Some(round) = lookup("JINGLE_ROUND_DURATIONS") {
            if matches!(round.to_lowercase().as_str(), "1" | "true" | "yes") {
                config.stream.sample_count_policy = SampleCountPolicy::Round;
            }
        }

        if let Some(player_str) = lookup("JINGLE_PLAYER") {
            if let Some(player) = PlayerChoice::parse(&player_str) {
                config.player = player;
            }
        }

        config
    }

    /// Returns the effective output path, using the default name if not specified.
    pub fn effective_output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output_path {
            path.clone()
        } else {
            PathBuf::from(DEFAULT_OUTPUT)
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(ref path) = self.output_path {
            if path.as_os_str().is_empty() {
                return Some("output path must not be empty".to_string());
            }
        }

        self.stream.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> JingleConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        JingleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn player_choice_parsing() {
        assert_eq!(PlayerChoice::parse("auto"), Some(PlayerChoice::Auto));
        assert_eq!(PlayerChoice::parse("NONE"), Some(PlayerChoice::Off));
        assert_eq!(PlayerChoice::parse("off"), Some(PlayerChoice::Off));
        assert_eq!(
            PlayerChoice::parse("paplay"),
            Some(PlayerChoice::Program("paplay".to_string()))
        );
        assert_eq!(PlayerChoice::parse("  "), None);
    }

    #[test]
    fn player_choice_display() {
        assert_eq!(PlayerChoice::Auto.to_string(), "auto");
        assert_eq!(PlayerChoice::Off.to_string(), "none");
        assert_eq!(PlayerChoice::Program("mpv".into()).to_string(), "mpv");
    }

    #[test]
    fn defaults() {
        let config = JingleConfig::new();
        assert_eq!(config.effective_output_path(), PathBuf::from("jingle_bells.wav"));
        assert_eq!(config.stream, AudioStreamParameters::default());
        assert_eq!(config.player, PlayerChoice::Auto);
        assert!(config.validate().is_none());
    }

    #[test]
    fn env_overrides() {
        let config = config_with(&[
            ("JINGLE_OUTPUT", "/tmp/out.wav"),
            ("JINGLE_SAMPLE_RATE", "8000"),
            ("JINGLE_AMPLITUDE", "12000"),
            ("JINGLE_CHANNELS", "2"),
            ("JINGLE_ROUND_DURATIONS", "true"),
            ("JINGLE_PLAYER", "none"),
        ]);
        assert_eq!(config.effective_output_path(), PathBuf::from("/tmp/out.wav"));
        assert_eq!(config.stream.sample_rate, 8000);
        assert_eq!(config.stream.amplitude, 12000);
        assert_eq!(config.stream.channel_count, 2);
        assert_eq!(config.stream.sample_count_policy, SampleCountPolicy::Round);
        assert_eq!(config.player, PlayerChoice::Off);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let config = config_with(&[
            ("JINGLE_SAMPLE_RATE", "0"),
            ("JINGLE_AMPLITUDE", "40000"),
            ("JINGLE_CHANNELS", "6"),
            ("JINGLE_ROUND_DURATIONS", "maybe"),
            ("JINGLE_PLAYER", ""),
        ]);
        assert_eq!(config.stream, AudioStreamParameters::default());
        assert_eq!(config.player, PlayerChoice::Auto);
    }

    #[test]
    fn config_validation() {
        let mut config = JingleConfig::new();
        config.stream.amplitude = 32768;
        assert!(config.validate().is_some());

        config.stream.amplitude = 16000;
        config.output_path = Some(PathBuf::new());
        assert!(config.validate().is_some());
    }
}
