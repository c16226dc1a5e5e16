//! External audio players.
//!
//! Playback is delegated to a command-line player spawned with the WAV path
//! as its only argument. No shell is involved, so paths are never
//! reinterpreted.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Why a file could not be played. Never fatal to a render.
#[derive(Debug)]
pub enum PlaybackError {
    /// No known player for this operating system.
    Unsupported {
        /// The host OS as reported by `std::env::consts::OS`.
        os: &'static str,
    },
    /// The player program could not be started.
    LaunchFailed { program: String, source: io::Error },
    /// The player ran but reported failure.
    ExitStatus { program: String, status: ExitStatus },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Unsupported { os } => {
                write!(f, "Platform not supported for sound playback ({})", os)
            }
            PlaybackError::LaunchFailed { program, source } => {
                write!(f, "Failed to launch `{}`: {}", program, source)
            }
            PlaybackError::ExitStatus { program, status } => {
                write!(f, "`{}` exited with {}", program, status)
            }
        }
    }
}

impl std::error::Error for PlaybackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaybackError::LaunchFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Something that can play a WAV file.
pub trait Player {
    /// Plays the file at `path`, blocking until playback ends.
    fn play(&self, path: &Path) -> Result<(), PlaybackError>;
}

/// Plays files by running an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlayer {
    program: String,
}

impl CommandPlayer {
    /// Creates a player that runs `program <path>`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program this player runs.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Player for CommandPlayer {
    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        log::info!("Running {} {}", self.program, path.display());

        let status = Command::new(&self.program)
            .arg(path)
            .status()
            .map_err(|source| PlaybackError::LaunchFailed {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(PlaybackError::ExitStatus {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

/// Returns the stock command-line player for the host OS.
///
/// `afplay` on macOS, `aplay` (ALSA) on Linux, none elsewhere.
pub fn platform_program() -> Option<&'static str> {
    if cfg!(target_os = "macos") {
        Some("afplay")
    } else if cfg!(target_os = "linux") {
        Some("aplay")
    } else {
        None
    }
}

/// Plays through the host's stock player, if it has one.
#[derive(Debug, Clone, Default)]
pub struct SystemPlayer {
    inner: Option<CommandPlayer>,
}

impl SystemPlayer {
    /// Detects the player for the host OS.
    pub fn detect() -> Self {
        Self {
            inner: platform_program().map(CommandPlayer::new),
        }
    }

    /// Returns true if the host has a known player.
    pub fn is_supported(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the program that will be run, if the host has one.
    pub fn program(&self) -> Option<&str> {
        self.inner.as_ref().map(CommandPlayer::program)
    }
}

impl Player for SystemPlayer {
    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        match &self.inner {
            Some(player) => player.play(path),
            None => Err(PlaybackError::Unsupported {
                os: std::env::consts::OS,
            }),
        }
    }
}
