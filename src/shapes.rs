//! Movable chord shapes
//!
//! The ten CAGED reference fingerings (C, A, G, E, and D roots in major and
//! minor) and the arithmetic to slide a shape up the neck so it sounds any
//! target root.

use std::fmt;

use crate::fretboard::{fret_interval, interval_from_c, PitchError, SEMITONES, STRING_COUNT};

/// Chord quality of a movable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordQuality {
    /// Major triad.
    Major,
    /// Minor triad.
    Minor,
}

impl ChordQuality {
    /// Short code used on the command line (`M` / `m`).
    pub fn code(self) -> &'static str {
        match self {
            ChordQuality::Major => "M",
            ChordQuality::Minor => "m",
        }
    }

    /// Parse a short code back into a quality.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(ChordQuality::Major),
            "m" => Some(ChordQuality::Minor),
            _ => None,
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
        };
        write!(f, "{name}")
    }
}

/// A movable chord fingering, defined at its open reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordShape {
    /// Root letter of the reference fingering (C, A, G, E, or D).
    pub letter: char,
    /// Quality the shape produces.
    pub quality: ChordQuality,
    /// String carrying the shape's lowest root note (1..=6, 6 = low E).
    pub root_string: u8,
    /// Fret sounding the root on `root_string` in the reference fingering.
    pub root_fret: u8,
    /// Per-string frets at the reference position, low string (6) first;
    /// `None` means the string is not played.
    pub offsets: [Option<u8>; STRING_COUNT],
}

/// The ten movable CAGED shapes at their open reference fingerings.
pub const CHORD_SHAPES: [ChordShape; 10] = [
    ChordShape {
        letter: 'C',
        quality: ChordQuality::Major,
        root_string: 5,
        root_fret: 3,
        offsets: [None, Some(3), Some(2), Some(0), Some(1), Some(0)],
    },
    ChordShape {
        letter: 'A',
        quality: ChordQuality::Major,
        root_string: 5,
        root_fret: 0,
        offsets: [None, Some(0), Some(2), Some(2), Some(2), Some(0)],
    },
    ChordShape {
        letter: 'G',
        quality: ChordQuality::Major,
        root_string: 6,
        root_fret: 3,
        offsets: [Some(3), Some(2), Some(0), Some(0), Some(0), Some(3)],
    },
    ChordShape {
        letter: 'E',
        quality: ChordQuality::Major,
        root_string: 6,
        root_fret: 0,
        offsets: [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)],
    },
    ChordShape {
        letter: 'D',
        quality: ChordQuality::Major,
        root_string: 4,
        root_fret: 0,
        offsets: [None, None, Some(0), Some(2), Some(3), Some(2)],
    },
    ChordShape {
        letter: 'C',
        quality: ChordQuality::Minor,
        root_string: 5,
        root_fret: 3,
        offsets: [None, Some(3), Some(1), Some(0), Some(1), None],
    },
    ChordShape {
        letter: 'A',
        quality: ChordQuality::Minor,
        root_string: 5,
        root_fret: 0,
        offsets: [None, Some(0), Some(2), Some(2), Some(1), Some(0)],
    },
    ChordShape {
        letter: 'G',
        quality: ChordQuality::Minor,
        root_string: 6,
        root_fret: 3,
        offsets: [Some(3), Some(1), Some(0), Some(0), Some(3), Some(3)],
    },
    ChordShape {
        letter: 'E',
        quality: ChordQuality::Minor,
        root_string: 6,
        root_fret: 0,
        offsets: [Some(0), Some(2), Some(2), Some(0), Some(0), Some(0)],
    },
    ChordShape {
        letter: 'D',
        quality: ChordQuality::Minor,
        root_string: 4,
        root_fret: 0,
        offsets: [None, None, Some(0), Some(2), Some(3), Some(1)],
    },
];

impl ChordShape {
    /// Look up the shape rooted on `letter` with `quality`.
    pub fn lookup(letter: char, quality: ChordQuality) -> Option<&'static ChordShape> {
        CHORD_SHAPES
            .iter()
            .find(|shape| shape.letter == letter && shape.quality == quality)
    }

    /// Semitone interval from C of the root at the reference fingering.
    fn reference_root(&self) -> Result<u8, PitchError> {
        fret_interval(self.root_string, self.root_fret)
    }

    /// Semitones the shape must slide up so its root sounds `target`.
    pub fn shift_to(&self, target: &str) -> Result<u8, PitchError> {
        let reference = self.reference_root()?;
        let target = interval_from_c(target)?;
        Ok((target + SEMITONES as u8 - reference) % SEMITONES as u8)
    }

    /// Per-string frets of the shape transposed so its root sounds `target`,
    /// low string (6) first. Unplayed strings pass through as `None`; frets
    /// are not clamped to the physical neck.
    pub fn transpose(&self, target: &str) -> Result<[Option<u8>; STRING_COUNT], PitchError> {
        let shift = self.shift_to(target)?;
        let mut frets = [None; STRING_COUNT];
        for (fret, &offset) in frets.iter_mut().zip(self.offsets.iter()) {
            *fret = offset.map(|f| f + shift);
        }
        Ok(frets)
    }

    /// Fret of the root note on `root_string` once transposed to `target`.
    pub fn root_anchor_fret(&self, target: &str) -> Result<u8, PitchError> {
        Ok(self.root_fret + self.shift_to(target)?)
    }
}
