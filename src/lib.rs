//! jingle: renders sine-wave melodies to 16-bit PCM WAV files.
//!
//! A song is a list of (frequency, duration) notes. Each note becomes a run
//! of sine samples, the runs are concatenated, and the result is written
//! behind a canonical 44-byte RIFF/WAVE header. The finished file can then be
//! handed to an external player.
//!
//! # Modules
//!
//! - [`types`]: Core data types (Note, Song, AudioStreamParameters, SessionReport)
//! - [`generation`]: Sine synthesis
//! - [`audio`]: WAV header and file writing
//! - [`playback`]: External players
//! - [`session`]: Render-then-play orchestration
//! - [`config`]: Runtime configuration (JingleConfig, PlayerChoice)
//! - [`error`]: Error types and codes (JingleError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use jingle::{
//!     session::Session,
//!     types::{AudioStreamParameters, Note, Song},
//! };
//!
//! let song = Song::new(vec![Note::new(440, 200), Note::rest(100), Note::new(493, 200)]);
//! let session = Session::new(song, AudioStreamParameters::default(), "a4_b4.wav");
//!
//! // Render only; pass Some(&player) to play it afterwards
//! let report = session.perform(None)?;
//! assert_eq!(report.total_samples, 8820 + 4410 + 8820);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod playback;
pub mod session;
pub mod songs;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::{JingleConfig, PlayerChoice};
pub use error::{ErrorCode, JingleError, Result};
pub use session::Session;
pub use types::{AudioStreamParameters, Note, SampleCountPolicy, SessionReport, Song};
