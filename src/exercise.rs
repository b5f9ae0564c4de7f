//! Drill engine
//!
//! A [`Drill`] is built once from the configured candidate domains and then
//! draws one [`Question`] per turn. Questions carry exactly the randomly
//! chosen parameters needed to pose a prompt and later reveal its answer.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::fretboard::{self, PitchError, MAX_FRET, SEMITONES, STRING_COUNT};
use crate::shapes::{ChordQuality, ChordShape};
use crate::tab;

/// The three drill variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    /// Name the note at a random string/fret position.
    Fret,
    /// Find a random note on a random string.
    Note,
    /// Transpose a movable chord shape to a random root.
    Chord,
}

/// Errors from drill configuration or question drawing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// A candidate domain was configured empty.
    #[error("no candidates to draw from for {what}")]
    EmptyDomain {
        /// Which domain was empty.
        what: &'static str,
    },

    /// No shape exists for the requested root letter and quality.
    #[error("no {quality} shape rooted on `{letter}`")]
    UnknownShape {
        /// Requested shape root letter.
        letter: char,
        /// Requested quality.
        quality: ChordQuality,
    },

    /// A chord-quality code was not recognized.
    #[error("unknown chord quality `{code}` (expected `M` or `m`)")]
    UnknownQuality {
        /// The code as given.
        code: String,
    },

    /// A pitch-table lookup failed; indicates a table defect.
    #[error(transparent)]
    Pitch(#[from] PitchError),
}

/// Builder for a [`Drill`], starting from the default domains.
pub struct DrillBuilder {
    kind: ExerciseKind,
    frets: Option<Vec<u8>>,
    shape_letters: Vec<char>,
    qualities: Vec<ChordQuality>,
}

impl DrillBuilder {
    /// Start a builder for `kind` with the default domains: the full fret
    /// range `0..=17`, shape letters `A` and `E`, and both qualities.
    pub fn new(kind: ExerciseKind) -> Self {
        DrillBuilder {
            kind,
            frets: None,
            shape_letters: vec!['A', 'E'],
            qualities: vec![ChordQuality::Major, ChordQuality::Minor],
        }
    }

    /// Restrict the fret exercise to these candidate frets.
    pub fn frets(mut self, frets: Vec<u8>) -> Self {
        self.frets = Some(frets);
        self
    }

    /// Set the shape root letters the chord exercise draws from.
    pub fn shape_letters(mut self, letters: Vec<char>) -> Self {
        self.shape_letters = letters;
        self
    }

    /// Set the qualities the chord exercise draws from.
    pub fn qualities(mut self, qualities: Vec<ChordQuality>) -> Self {
        self.qualities = qualities;
        self
    }

    /// Validate the domains and build the drill.
    ///
    /// Every configured letter/quality pair must resolve to a known shape,
    /// and no domain may be empty.
    pub fn build(self) -> Result<Drill, DrillError> {
        if let Some(frets) = &self.frets {
            if frets.is_empty() {
                return Err(DrillError::EmptyDomain { what: "frets" });
            }
        }
        if self.shape_letters.is_empty() {
            return Err(DrillError::EmptyDomain {
                what: "chord shapes",
            });
        }
        if self.qualities.is_empty() {
            return Err(DrillError::EmptyDomain {
                what: "chord qualities",
            });
        }
        if self.kind == ExerciseKind::Chord {
            for &letter in &self.shape_letters {
                for &quality in &self.qualities {
                    if ChordShape::lookup(letter, quality).is_none() {
                        return Err(DrillError::UnknownShape { letter, quality });
                    }
                }
            }
        }
        Ok(Drill {
            kind: self.kind,
            frets: self.frets,
            shape_letters: self.shape_letters,
            qualities: self.qualities,
        })
    }
}

/// A configured drill ready to draw questions.
#[derive(Debug)]
pub struct Drill {
    kind: ExerciseKind,
    frets: Option<Vec<u8>>,
    shape_letters: Vec<char>,
    qualities: Vec<ChordQuality>,
}

impl Drill {
    /// Builder for a drill of the given variant.
    pub fn builder(kind: ExerciseKind) -> DrillBuilder {
        DrillBuilder::new(kind)
    }

    /// Which variant this drill runs.
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Draw one question uniformly from the configured domains.
    pub fn draw(&self, rng: &mut impl Rng) -> Result<Question, DrillError> {
        match self.kind {
            ExerciseKind::Fret => {
                let string = rng.gen_range(1..=STRING_COUNT as u8);
                let fret = match &self.frets {
                    Some(frets) => *pick(frets, rng, "frets")?,
                    None => rng.gen_range(0..=MAX_FRET),
                };
                Ok(Question::Fret { string, fret })
            }
            ExerciseKind::Note => {
                let string = rng.gen_range(1..=STRING_COUNT as u8);
                let note = draw_note(rng)?;
                Ok(Question::Note { string, note })
            }
            ExerciseKind::Chord => {
                let letter = *pick(&self.shape_letters, rng, "chord shapes")?;
                let quality = *pick(&self.qualities, rng, "chord qualities")?;
                let shape = ChordShape::lookup(letter, quality)
                    .ok_or(DrillError::UnknownShape { letter, quality })?;
                let target = draw_note(rng)?;
                Ok(Question::Chord { shape, target })
            }
        }
    }
}

/// Draw a pitch by first picking a pitch-class position uniformly, then one
/// of its enharmonic spellings uniformly.
fn draw_note(rng: &mut impl Rng) -> Result<&'static str, DrillError> {
    let interval = rng.gen_range(0..SEMITONES as u8);
    let spellings = fretboard::spellings_at(interval);
    Ok(*pick(spellings, rng, "note spellings")?)
}

/// Uniform draw from a finite domain; empty domains are an error, never a
/// panic.
fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng, what: &'static str) -> Result<&'a T, DrillError> {
    items.choose(rng).ok_or(DrillError::EmptyDomain { what })
}

/// One turn's question, discarded after the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Name the note at this position.
    Fret {
        /// String index, 1..=6 (6 = low E).
        string: u8,
        /// Fret number; 0 is the open string.
        fret: u8,
    },
    /// Find this note on this string.
    Note {
        /// String index, 1..=6.
        string: u8,
        /// The note to find, one enharmonic spelling.
        note: &'static str,
    },
    /// Play this shape transposed to this root.
    Chord {
        /// The movable shape to use.
        shape: &'static ChordShape,
        /// Target root, one enharmonic spelling.
        target: &'static str,
    },
}

impl Question {
    /// Text shown before the reveal pause. Fret questions include the given
    /// position as a diagram; chord questions show only the root anchor fret
    /// on the shape's root string.
    pub fn prompt(&self) -> Result<String, PitchError> {
        match *self {
            Question::Fret { string, fret } => Ok(format!(
                "{}\n{}",
                format_position(string, fret),
                tab::single_fret_diagram(string, fret)
            )),
            Question::Note { string, note } => Ok(format!(
                "Play {} on the {} string",
                note,
                fretboard::string_label(string)
            )),
            Question::Chord { shape, target } => {
                let anchor = shape.root_anchor_fret(target)?;
                Ok(format!(
                    "Play {} {} using the {} shape\n{}",
                    target,
                    shape.quality,
                    shape.letter,
                    tab::single_fret_diagram(shape.root_string, anchor)
                ))
            }
        }
    }

    /// Text shown after the reveal pause — the answer.
    pub fn reveal(&self) -> Result<String, PitchError> {
        match *self {
            Question::Fret { string, fret } => Ok(format!(
                "The note is {}",
                fretboard::fret_to_pitch(string, fret)?
            )),
            Question::Note { string, note } => {
                let fret = fretboard::pitch_to_fret(string, note)?;
                Ok(format!(
                    "{}\n{}",
                    format_position(string, fret),
                    tab::single_fret_diagram(string, fret)
                ))
            }
            Question::Chord { shape, target } => {
                let anchor = shape.root_anchor_fret(target)?;
                let frets = shape.transpose(target)?;
                Ok(format!(
                    "{} shape at fret {}\n{}",
                    shape.letter,
                    anchor,
                    tab::chord_diagram(&frets)
                ))
            }
        }
    }
}

/// Human description of a position, e.g. `"6E fret 3"` or `"Open 6E string"`.
fn format_position(string: u8, fret: u8) -> String {
    let label = fretboard::string_label(string);
    if fret == 0 {
        format!("Open {label} string")
    } else {
        format!("{label} fret {fret}")
    }
}
