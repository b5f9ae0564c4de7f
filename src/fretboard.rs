//! Fretboard arithmetic
//!
//! The twelve-position pitch-class cycle with enharmonic spellings, the
//! standard-tuning table, and note⇄fret conversion. All interval arithmetic
//! is modulo 12 with results normalized into `[0, 11]`.

use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Number of pitch classes in the equal-tempered octave.
pub const SEMITONES: usize = 12;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Highest fret drawn by the fret exercise when no restriction is given.
pub const MAX_FRET: u8 = 17;

/// Enharmonic spellings for each pitch class, C = 0. The first spelling of
/// each position is the canonical one.
const NOTE_SPELLINGS: [&[&str]; SEMITONES] = [
    &["C"],
    &["C#", "Db"],
    &["D"],
    &["D#", "Eb"],
    &["E"],
    &["F"],
    &["F#", "Gb"],
    &["G"],
    &["G#", "Ab"],
    &["A"],
    &["A#", "Bb"],
    &["B"],
];

/// Open-string notes for strings 1 (high E) through 6 (low E).
const OPEN_NOTES: [&str; STRING_COUNT] = ["E", "B", "G", "D", "A", "E"];

/// Errors from pitch-name lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PitchError {
    /// The name matched no known enharmonic spelling. Since every drawn note
    /// comes from the pitch table itself, hitting this at runtime means a
    /// defect in the chord-shape or tuning tables.
    #[error("unknown pitch name `{name}`")]
    UnknownPitch {
        /// The spelling that failed to resolve.
        name: String,
    },
}

/// Reverse index from spelling to semitone, built on first use.
fn spelling_index() -> &'static HashMap<&'static str, u8> {
    static INDEX: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for (interval, spellings) in NOTE_SPELLINGS.iter().enumerate() {
            for &spelling in *spellings {
                map.insert(spelling, interval as u8);
            }
        }
        map
    })
}

/// Semitone interval from C for any enharmonic spelling, in `[0, 11]`.
///
/// Both spellings of a position resolve to the same interval:
/// `interval_from_c("C#") == interval_from_c("Db")`.
pub fn interval_from_c(name: &str) -> Result<u8, PitchError> {
    spelling_index()
        .get(name)
        .copied()
        .ok_or_else(|| PitchError::UnknownPitch {
            name: name.to_string(),
        })
}

/// All spellings of the pitch class `interval` semitones above C.
///
/// The interval is taken modulo 12.
pub fn spellings_at(interval: u8) -> &'static [&'static str] {
    NOTE_SPELLINGS[interval as usize % SEMITONES]
}

/// Joined display name for revealing answers, e.g. `"C# or Db"`.
pub fn display_name(interval: u8) -> String {
    spellings_at(interval).join(" or ")
}

/// Open-string note of `string`.
///
/// `string` must be in `1..=6` (6 = low E); the drill engine never produces
/// anything else.
pub fn open_note(string: u8) -> &'static str {
    debug_assert!((1..=STRING_COUNT as u8).contains(&string));
    OPEN_NOTES[string as usize - 1]
}

/// Label combining string index and open note, e.g. `"6E"`.
pub fn string_label(string: u8) -> String {
    format!("{}{}", string, open_note(string))
}

/// Semitone interval from C sounded at `fret` on `string`.
pub fn fret_interval(string: u8, fret: u8) -> Result<u8, PitchError> {
    let open = interval_from_c(open_note(string))?;
    Ok(((open as u16 + fret as u16) % SEMITONES as u16) as u8)
}

/// Display name of the note at `fret` on `string`, all spellings joined.
pub fn fret_to_pitch(string: u8, fret: u8) -> Result<String, PitchError> {
    Ok(display_name(fret_interval(string, fret)?))
}

/// Lowest fret in `[0, 11]` sounding `name` on `string`.
///
/// Positions an octave up (fret 12 and above) also sound the note but are
/// never returned; callers wanting an upper-fretboard voicing must add 12
/// themselves.
pub fn pitch_to_fret(string: u8, name: &str) -> Result<u8, PitchError> {
    let target = interval_from_c(name)?;
    let open = interval_from_c(open_note(string))?;
    Ok((target + SEMITONES as u8 - open) % SEMITONES as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enharmonic_spellings_share_an_interval() {
        for spellings in NOTE_SPELLINGS {
            let first = interval_from_c(spellings[0]).unwrap();
            for &spelling in spellings {
                assert_eq!(interval_from_c(spelling).unwrap(), first);
            }
        }
        assert_eq!(
            interval_from_c("C#").unwrap(),
            interval_from_c("Db").unwrap()
        );
    }

    #[test]
    fn intervals_stay_in_range() {
        for spellings in NOTE_SPELLINGS {
            for &spelling in spellings {
                assert!(interval_from_c(spelling).unwrap() < 12);
            }
        }
        for string in 1..=STRING_COUNT as u8 {
            for fret in 0..=MAX_FRET {
                assert!(fret_interval(string, fret).unwrap() < 12);
            }
        }
    }

    #[test]
    fn unknown_spelling_is_an_error() {
        assert_eq!(
            interval_from_c("H"),
            Err(PitchError::UnknownPitch {
                name: "H".to_string()
            })
        );
    }

    #[test]
    fn open_strings_sound_their_tuning() {
        assert_eq!(interval_from_c("E").unwrap(), 4);
        assert_eq!(fret_to_pitch(6, 0).unwrap(), "E");
        assert_eq!(fret_to_pitch(6, 3).unwrap(), "G");
        assert_eq!(fret_to_pitch(1, 0).unwrap(), "E");
        assert_eq!(fret_to_pitch(5, 3).unwrap(), "C");
        assert_eq!(fret_to_pitch(2, 1).unwrap(), "C");
    }

    #[test]
    fn answers_join_enharmonic_spellings() {
        assert_eq!(display_name(1), "C# or Db");
        assert_eq!(display_name(4), "E");
        assert_eq!(fret_to_pitch(6, 2).unwrap(), "F# or Gb");
    }

    #[test]
    fn string_labels_pair_index_and_note() {
        assert_eq!(string_label(6), "6E");
        assert_eq!(string_label(5), "5A");
        assert_eq!(string_label(2), "2B");
    }

    #[test]
    fn fret_round_trips_up_to_an_octave() {
        for string in 1..=STRING_COUNT as u8 {
            for fret in 0..=MAX_FRET {
                let canonical = spellings_at(fret_interval(string, fret).unwrap())[0];
                assert_eq!(pitch_to_fret(string, canonical).unwrap(), fret % 12);
            }
        }
    }

    // Frets 12..=24 would sound the same notes, but the conversion always
    // answers with the lowest voicing.
    #[test]
    fn note_answers_prefer_the_lowest_fret() {
        assert_eq!(pitch_to_fret(6, "E").unwrap(), 0);
        assert_eq!(pitch_to_fret(5, "C").unwrap(), 3);
        assert_eq!(pitch_to_fret(1, "D#").unwrap(), 11);
        assert_eq!(pitch_to_fret(1, "Eb").unwrap(), 11);
    }
}
