//! Terminal drills for memorizing the guitar fretboard.
//!
//! Runs a fixed number of turns: clear the screen, print a randomly drawn
//! question, pause, reveal the answer, pause again. Drill output goes to
//! stdout; debug detail goes to tracing on stderr (silent unless enabled via
//! `RUST_LOG`).

use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use fretboard_trainer::{ChordQuality, Drill, DrillError, ExerciseKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Post-answer pause for the fret and note exercises, seconds.
const DEFAULT_TIME_BETWEEN_TURNS: f64 = 3.0;
/// Post-answer pause for the chord exercise, seconds; chord diagrams take
/// longer to play through.
const DEFAULT_TIME_BETWEEN_TURNS_CHORD: f64 = 10.0;

#[derive(Parser, Debug)]
#[command(name = "fretboard-trainer")]
#[command(about = "Randomized guitar fretboard drills")]
struct Args {
    /// Drill variant to run
    #[arg(long, value_enum, default_value = "fret")]
    exercise: Exercise,

    /// Number of question/answer turns
    #[arg(long, default_value_t = 20)]
    number_of_turns: u32,

    /// Seconds to rest after each answer (default 3, or 10 for chords)
    #[arg(long)]
    time_between_turns: Option<f64>,

    /// Seconds to think before the answer is revealed
    #[arg(long, default_value_t = 2.0)]
    time_before_reveal: f64,

    /// Restrict the fret exercise to these frets, e.g. `0,3,5,7`
    #[arg(long, value_delimiter = ',')]
    frets: Option<Vec<u8>>,

    /// Shape root letters for the chord exercise (C, A, G, E, D)
    #[arg(long, value_delimiter = ',', default_value = "A,E")]
    chord_shapes: Vec<char>,

    /// Chord quality codes for the chord exercise (`M` major, `m` minor)
    #[arg(long, value_delimiter = ',', default_value = "M,m")]
    chords: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Exercise {
    Fret,
    Note,
    Chord,
}

impl From<Exercise> for ExerciseKind {
    fn from(exercise: Exercise) -> Self {
        match exercise {
            Exercise::Fret => ExerciseKind::Fret,
            Exercise::Note => ExerciseKind::Note,
            Exercise::Chord => ExerciseKind::Chord,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let kind = ExerciseKind::from(args.exercise);

    let qualities = args
        .chords
        .iter()
        .map(|code| {
            ChordQuality::from_code(code).ok_or_else(|| DrillError::UnknownQuality {
                code: code.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = Drill::builder(kind)
        .shape_letters(args.chord_shapes)
        .qualities(qualities);
    if let Some(frets) = args.frets {
        builder = builder.frets(frets);
    }
    let drill = builder.build().context("invalid drill configuration")?;

    let time_between_turns = args.time_between_turns.unwrap_or(match kind {
        ExerciseKind::Chord => DEFAULT_TIME_BETWEEN_TURNS_CHORD,
        ExerciseKind::Fret | ExerciseKind::Note => DEFAULT_TIME_BETWEEN_TURNS,
    });
    ensure!(
        time_between_turns >= 0.0 && args.time_before_reveal >= 0.0,
        "pause durations must be non-negative"
    );

    let mut rng = rand::thread_rng();
    for turn in 0..args.number_of_turns {
        let question = drill.draw(&mut rng)?;
        tracing::debug!(turn, ?question, "drew question");

        clear_screen()?;
        println!("{}", question.prompt()?);
        thread::sleep(Duration::from_secs_f64(args.time_before_reveal));

        println!();
        println!("{}", question.reveal()?);
        println!();
        thread::sleep(Duration::from_secs_f64(time_between_turns));
    }

    Ok(())
}

/// Clear the terminal and move the cursor home before each turn.
fn clear_screen() -> Result<()> {
    let mut stdout = stdout();
    execute!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    stdout.flush()?;
    Ok(())
}
