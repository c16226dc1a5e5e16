//! Built-in melodies.
//!
//! Songs are static note tables assembled from the pitch and length
//! constants below.

use crate::types::{Note, Song};

/// Pitches of the fourth octave in whole Hz.
pub mod pitch {
    pub const C: u32 = 261;
    pub const D: u32 = 294;
    pub const E: u32 = 329;
    pub const F: u32 = 349;
    pub const G: u32 = 392;
    pub const A: u32 = 440;
    pub const B: u32 = 493;
}

/// Note lengths in milliseconds.
pub mod length {
    pub const WHOLE: u32 = 800;
    pub const HALF: u32 = 400;
    pub const QUARTER: u32 = 200;
    pub const EIGHTH: u32 = 100;
}

use length::{EIGHTH, HALF, QUARTER, WHOLE};
use pitch::{C, D, E, F, G};

const fn n(frequency_hz: u32, duration_ms: u32) -> Note {
    Note::new(frequency_hz, duration_ms)
}

const fn rest(duration_ms: u32) -> Note {
    Note::rest(duration_ms)
}

/// "Jingle Bells", verse and chorus.
#[rustfmt::skip]
pub static JINGLE_BELLS: &[Note] = &[
    // Dashing through the snow
    n(E, QUARTER), n(E, QUARTER), n(E, HALF),
    n(E, QUARTER), n(E, QUARTER), n(E, HALF),
    n(E, QUARTER), n(G, QUARTER), n(C, QUARTER), n(D, QUARTER),
    n(E, WHOLE),
    rest(EIGHTH),
    // In a one-horse open sleigh
    n(F, QUARTER), n(F, QUARTER), n(F, QUARTER), n(F, QUARTER),
    n(F, QUARTER), n(E, QUARTER), n(E, QUARTER), n(E, EIGHTH), n(E, EIGHTH),
    n(E, QUARTER), n(D, QUARTER), n(D, QUARTER), n(E, QUARTER),
    n(D, HALF), n(G, HALF),
    rest(QUARTER),
    // O'er the fields we go
    n(E, QUARTER), n(E, QUARTER), n(E, HALF),
    n(E, QUARTER), n(E, QUARTER), n(E, HALF),
    n(E, QUARTER), n(G, QUARTER), n(C, QUARTER), n(D, QUARTER),
    n(E, WHOLE),
    rest(EIGHTH),
    // Laughing all the way
    n(F, QUARTER), n(F, QUARTER), n(F, QUARTER), n(F, QUARTER),
    n(F, QUARTER), n(E, QUARTER), n(E, QUARTER), n(E, EIGHTH), n(E, EIGHTH),
    n(G, QUARTER), n(G, QUARTER), n(F, QUARTER), n(D, QUARTER),
    n(C, WHOLE),
    rest(QUARTER),
    // Jingle bells, jingle bells
    n(E, QUARTER), n(E, QUARTER), n(E, HALF),
    n(E, QUARTER), n(E, QUARTER), n(E, HALF),
    // Jingle all the way
    n(E, QUARTER), n(G, QUARTER), n(C, QUARTER), n(D, QUARTER),
    n(E, WHOLE),
    rest(EIGHTH),
    // Oh what fun it is to ride
    n(F, QUARTER), n(F, QUARTER), n(F, QUARTER), n(F, QUARTER),
    n(F, QUARTER), n(E, QUARTER), n(E, QUARTER), n(E, EIGHTH), n(E, EIGHTH),
    // In a one-horse open sleigh
    n(G, QUARTER), n(G, QUARTER), n(F, QUARTER), n(D, QUARTER),
    n(C, WHOLE),
    rest(QUARTER),
    // Hey!
    n(G, QUARTER), n(E, QUARTER), n(D, QUARTER), n(C, HALF),
    n(G, WHOLE),
];

/// Returns "Jingle Bells" as a [`Song`].
pub fn jingle_bells() -> Song {
    Song::from(JINGLE_BELLS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::total_samples;
    use crate::types::AudioStreamParameters;

    #[test]
    fn jingle_bells_shape() {
        let song = jingle_bells();
        assert_eq!(song.len(), 87);
        assert_eq!(song.notes().iter().filter(|n| n.is_rest()).count(), 6);
        assert_eq!(song.notes()[0], Note::new(pitch::E, length::QUARTER));
        assert_eq!(*song.notes().last().unwrap(), Note::new(pitch::G, length::WHOLE));
    }

    #[test]
    fn jingle_bells_length() {
        let song = jingle_bells();
        assert_eq!(song.duration_ms(), 21_900);
        // Every length is a multiple of 100ms, so nothing is lost to truncation
        assert_eq!(
            total_samples(&song, &AudioStreamParameters::default()).unwrap(),
            44100 * 21_900 / 1000
        );
    }
}
