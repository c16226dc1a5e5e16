//! Render-and-play orchestration.
//!
//! A Session owns one song, the stream parameters and the output path. It
//! writes the file completely before handing it to the player, and treats
//! every playback problem as a notice rather than a failure.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::audio::{write_wav, WavSummary};
use crate::config::JingleConfig;
use crate::error::Result;
use crate::generation::samples_to_duration;
use crate::playback::Player;
use crate::types::{AudioStreamParameters, PlaybackOutcome, SessionReport, Song};

/// One render of one song to one file.
#[derive(Debug, Clone)]
pub struct Session {
    song: Song,
    params: AudioStreamParameters,
    output_path: PathBuf,
}

impl Session {
    /// Creates a session.
    pub fn new(song: Song, params: AudioStreamParameters, output_path: impl Into<PathBuf>) -> Self {
        Self {
            song,
            params,
            output_path: output_path.into(),
        }
    }

    /// Creates a session using the stream and output settings of `config`.
    pub fn from_config(config: &JingleConfig, song: Song) -> Self {
        Self::new(song, config.stream, config.effective_output_path())
    }

    /// Returns the song being rendered.
    pub fn song(&self) -> &Song {
        &self.song
    }

    /// Returns the output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Synthesizes the song and writes the WAV file.
    pub fn render(&self) -> Result<WavSummary> {
        write_wav(&self.output_path, &self.song, &self.params)
    }

    /// Renders the file, then plays it with `player` if one is given.
    ///
    /// Only rendering errors are returned. Playback errors are reported on
    /// stderr and recorded in the report.
    pub fn perform(&self, player: Option<&dyn Player>) -> Result<SessionReport> {
        let start_time = Instant::now();
        let summary = self.render()?;
        let render_time_sec = start_time.elapsed().as_secs_f32();

        log::debug!(
            "Rendered {} notes in {:.3}s",
            self.song.len(),
            render_time_sec
        );

        let playback = match player {
            None => PlaybackOutcome::Skipped,
            Some(player) => match player.play(&self.output_path) {
                Ok(()) => PlaybackOutcome::Played,
                Err(e) => {
                    eprintln!("{}", e);
                    eprintln!("The file is still available at {}", self.output_path.display());
                    PlaybackOutcome::Failed(e.to_string())
                }
            },
        };

        Ok(SessionReport {
            path: self.output_path.clone(),
            sample_rate: self.params.sample_rate,
            channel_count: self.params.channel_count,
            note_count: self.song.len(),
            total_samples: summary.total_samples,
            duration_sec: samples_to_duration(summary.total_samples, self.params.sample_rate),
            file_size: summary.file_size,
            render_time_sec,
            playback,
        })
    }
}
