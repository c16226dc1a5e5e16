//! Error types for jingle.
//!
//! Defines the error codes and the error type used for every fatal failure
//! in the render path. Playback problems are not fatal and use
//! [`crate::playback::PlaybackError`] instead.

use std::fmt;
use std::path::Path;

/// Error codes identifying the kind of fatal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The output file could not be created or fully written.
    /// Trigger: missing directory, permissions, disk full.
    FileWriteFailed,

    /// The sample data does not fit the 32-bit size fields of the header.
    /// Trigger: extremely long songs or very high sample rates.
    StreamTooLong,

    /// Stream parameters violate their invariants.
    /// Trigger: zero sample rate, amplitude that would clip, unsupported depth.
    InvalidParameters,

    /// A song could not be loaded.
    /// Trigger: unreadable file, malformed JSON, empty note list.
    InvalidSong,

    /// Reading the start prompt from stdin failed.
    InputFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FileWriteFailed => "FILE_WRITE_FAILED",
            ErrorCode::StreamTooLong => "STREAM_TOO_LONG",
            ErrorCode::InvalidParameters => "INVALID_PARAMETERS",
            ErrorCode::InvalidSong => "INVALID_SONG",
            ErrorCode::InputFailed => "INPUT_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::FileWriteFailed => "Failed to write the WAV file",
            ErrorCode::StreamTooLong => "Audio data exceeds the 4 GiB WAV size limit",
            ErrorCode::InvalidParameters => "Audio stream parameters are invalid",
            ErrorCode::InvalidSong => "Song could not be loaded",
            ErrorCode::InputFailed => "Failed to read from standard input",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::FileWriteFailed => {
                "Check that the output directory exists and is writable, \
                 and that there is free disk space"
            }
            ErrorCode::StreamTooLong => "Use a shorter song or a lower sample rate",
            ErrorCode::InvalidParameters => {
                "Use a non-zero sample rate, 16 bits per sample, 1 or 2 channels \
                 and an amplitude below 32768"
            }
            ErrorCode::InvalidSong => {
                "Provide a non-empty JSON array of {\"frequency_hz\": .., \"duration_ms\": ..} objects"
            }
            ErrorCode::InputFailed => "Run with --no-wait when stdin is not interactive",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for jingle operations.
#[derive(Debug)]
pub struct JingleError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl JingleError {
    /// Creates a new JingleError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new JingleError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a FILE_WRITE_FAILED error for `path`.
    pub fn file_write_failed(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::FileWriteFailed,
            format!("Failed to write {}: {}", path.display(), source),
            source,
        )
    }

    /// Creates a STREAM_TOO_LONG error.
    pub fn stream_too_long(total_samples: u64) -> Self {
        Self::new(
            ErrorCode::StreamTooLong,
            format!("{} samples do not fit in a WAV data chunk", total_samples),
        )
    }

    /// Creates an INVALID_PARAMETERS error.
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidParameters,
            format!("Invalid stream parameters: {}", reason.into()),
        )
    }

    /// Creates an INVALID_SONG error.
    pub fn invalid_song(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidSong,
            format!("Invalid song: {}", reason.into()),
        )
    }

    /// Creates an INPUT_FAILED error.
    pub fn input_failed(source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::InputFailed,
            format!("Failed to read stdin: {}", source),
            source,
        )
    }
}

impl fmt::Display for JingleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for JingleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using JingleError.
pub type Result<T> = std::result::Result<T, JingleError>;
