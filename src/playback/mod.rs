//! Playback module.
//!
//! Hands rendered files to an external player. Failures here are reported
//! but never abort a run.

pub mod player;

// Re-export commonly used items
pub use player::{platform_program, CommandPlayer, PlaybackError, Player, SystemPlayer};

use crate::config::PlayerChoice;

/// Builds the player selected by `choice`, or None when playback is off.
pub fn player_for(choice: &PlayerChoice) -> Option<Box<dyn Player>> {
    match choice {
        PlayerChoice::Auto => {
            let player = SystemPlayer::detect();
            match player.program() {
                Some(program) => log::debug!("Using system player {}", program),
                None => log::debug!("No system player for {}", std::env::consts::OS),
            }
            Some(Box::new(player))
        }
        PlayerChoice::Off => None,
        PlayerChoice::Program(program) => Some(Box::new(CommandPlayer::new(program.clone()))),
    }
}
