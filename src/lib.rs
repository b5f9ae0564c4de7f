//! # fretboard_trainer
//!
//! Randomized terminal drills for memorizing the guitar fretboard: name the
//! note at a position, find a note on a string, or transpose a movable chord
//! shape to a new root.
//!
//! ## Example
//! ```rust
//! use fretboard_trainer::{Drill, ExerciseKind};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Configure a drill, optionally restricting its domains
//!     let drill = Drill::builder(ExerciseKind::Fret)
//!         .frets(vec![0, 3, 5, 7])
//!         .build()?;
//!
//!     // 2) Each turn: draw a question, show the prompt, pause, reveal
//!     let mut rng = rand::thread_rng();
//!     let question = drill.draw(&mut rng)?;
//!     println!("{}", question.prompt()?);
//!     // ...think...
//!     println!("{}", question.reveal()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! All tables (pitch classes, tuning, chord shapes) are fixed for one
//! six-string standard-tuning instrument and never mutated after startup.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Drill configuration and per-turn questions.
pub use exercise::{Drill, DrillBuilder, DrillError, ExerciseKind, Question};

/// Pitch-class arithmetic and conversion errors.
pub use fretboard::{PitchError, MAX_FRET};

/// Movable chord shapes.
pub use shapes::{ChordQuality, ChordShape, CHORD_SHAPES};

/// Tab-diagram values.
pub use tab::TabValue;

/// The drill engine: question drawing and answer rendering.
pub mod exercise;

/// Pitch table, standard tuning, and note⇄fret conversion.
pub mod fretboard;

/// Movable chord shapes and transposition.
pub mod shapes;

/// ASCII tab diagrams.
pub mod tab;
