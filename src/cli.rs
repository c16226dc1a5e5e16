//! Command-line argument parser.
//!
//! Every flag is optional: with none the program renders "Jingle Bells" to
//! `jingle_bells.wav` at 44.1kHz and plays it.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{JingleConfig, PlayerChoice};
use crate::error::{JingleError, Result};
use crate::songs;
use crate::types::{Note, SampleCountPolicy, Song};

/// Length of a `--tone` when `--duration-ms` is not given.
pub const DEFAULT_TONE_MS: u32 = 1000;

/// jingle: render a melody to a WAV file and play it
#[derive(Parser, Debug)]
#[command(name = "jingle")]
#[command(about = "Renders a sine-wave melody to a 16-bit PCM WAV file and plays it")]
#[command(version)]
pub struct Cli {
    /// Output WAV file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(short = 'r', long, value_parser = clap::value_parser!(u32).range(1..=384_000))]
    pub sample_rate: Option<u32>,

    /// Peak sample magnitude (below 32768)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=32767))]
    pub amplitude: Option<u32>,

    /// Number of channels written to the file (the melody is duplicated)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=2))]
    pub channels: Option<u16>,

    /// Round note lengths to the nearest sample instead of truncating
    #[arg(long)]
    pub round_durations: bool,

    /// JSON song file: [{"frequency_hz": 440, "duration_ms": 200}, ...]
    #[arg(short, long, conflicts_with = "tone")]
    pub song: Option<PathBuf>,

    /// Render a single tone of this frequency (Hz) instead of a song
    #[arg(short, long)]
    pub tone: Option<u32>,

    /// Length of the --tone in milliseconds
    #[arg(short, long, requires = "tone")]
    pub duration_ms: Option<u32>,

    /// Player: "auto", "none", or a program run as `<program> <file>`
    #[arg(short, long, value_parser = parse_player)]
    pub player: Option<PlayerChoice>,

    /// Start immediately instead of waiting for Enter
    #[arg(long)]
    pub no_wait: bool,

    /// Print a JSON report of the render to stdout (implies --no-wait)
    #[arg(long)]
    pub json: bool,
}

fn parse_player(s: &str) -> std::result::Result<PlayerChoice, String> {
    PlayerChoice::parse(s).ok_or_else(|| "player must not be empty".to_string())
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies the flags given on the command line on top of `config`.
    pub fn apply(&self, config: &mut JingleConfig) {
        if let Some(ref output) = self.output {
            config.output_path = Some(output.clone());
        }
        if let Some(sample_rate) = self.sample_rate {
            config.stream.sample_rate = sample_rate;
        }
        if let Some(amplitude) = self.amplitude {
            config.stream.amplitude = amplitude;
        }
        if let Some(channels) = self.channels {
            config.stream.channel_count = channels;
        }
        if self.round_durations {
            config.stream.sample_count_policy = SampleCountPolicy::Round;
        }
        if let Some(ref player) = self.player {
            config.player = player.clone();
        }
    }

    /// Returns true if the program should wait for Enter before rendering.
    pub fn should_wait(&self) -> bool {
        !self.no_wait && !self.json
    }

    /// Loads the song selected by the flags.
    pub fn song(&self) -> Result<Song> {
        if let Some(frequency_hz) = self.tone {
            let duration_ms = self.duration_ms.unwrap_or(DEFAULT_TONE_MS);
            if duration_ms == 0 {
                return Err(JingleError::invalid_song("tone duration must be > 0"));
            }
            return Ok(Song::single(Note::new(frequency_hz, duration_ms)));
        }

        match self.song {
            Some(ref path) => Song::load(path),
            None => Ok(songs::jingle_bells()),
        }
    }

    /// Human-readable name of the selected song.
    pub fn title(&self) -> String {
        if let Some(frequency_hz) = self.tone {
            return format!("{} Hz tone", frequency_hz);
        }

        match self.song {
            Some(ref path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "Jingle Bells".to_string(),
        }
    }
}
