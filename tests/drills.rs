//! Integration tests for the drill engine: seeded draws stay inside their
//! configured domains, and revealed answers agree with the pitch table and
//! shape transposition end to end.

use fretboard_trainer::fretboard::{fret_interval, fret_to_pitch, interval_from_c, pitch_to_fret};
use fretboard_trainer::tab::single_fret_diagram;
use fretboard_trainer::{ChordQuality, ChordShape, Drill, ExerciseKind, Question, MAX_FRET};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DRAWS: usize = 200;

fn seeded() -> StdRng {
    StdRng::seed_from_u64(0xF4E7)
}

#[test]
fn fret_drill_answers_match_the_pitch_table() {
    let drill = Drill::builder(ExerciseKind::Fret).build().unwrap();
    let mut rng = seeded();

    for _ in 0..DRAWS {
        let question = drill.draw(&mut rng).unwrap();
        let Question::Fret { string, fret } = question else {
            panic!("fret drill drew {question:?}");
        };
        assert!((1..=6).contains(&string));
        assert!(fret <= MAX_FRET);

        let reveal = question.reveal().unwrap();
        assert_eq!(
            reveal,
            format!("The note is {}", fret_to_pitch(string, fret).unwrap())
        );
    }
}

#[test]
fn note_drill_reveals_the_lowest_playable_position() {
    let drill = Drill::builder(ExerciseKind::Note).build().unwrap();
    let mut rng = seeded();

    for _ in 0..DRAWS {
        let question = drill.draw(&mut rng).unwrap();
        let Question::Note { string, note } = question else {
            panic!("note drill drew {question:?}");
        };

        let fret = pitch_to_fret(string, note).unwrap();
        assert!(fret < 12);
        assert_eq!(
            fret_interval(string, fret).unwrap(),
            interval_from_c(note).unwrap()
        );

        let reveal = question.reveal().unwrap();
        assert!(reveal.ends_with(&single_fret_diagram(string, fret)));
    }
}

#[test]
fn chord_drill_covers_the_full_caged_domain() {
    let drill = Drill::builder(ExerciseKind::Chord)
        .shape_letters(vec!['C', 'A', 'G', 'E', 'D'])
        .build()
        .unwrap();
    let mut rng = seeded();

    for _ in 0..DRAWS {
        let question = drill.draw(&mut rng).unwrap();
        let Question::Chord { shape, target } = question else {
            panic!("chord drill drew {question:?}");
        };

        let reveal = question.reveal().unwrap();
        let diagram: Vec<&str> = reveal.lines().skip(1).collect();
        assert_eq!(diagram.len(), 6);
        let len = diagram[0].len();
        assert!(diagram.iter().all(|line| line.len() == len));

        // The root string must sound the target root somewhere in the voicing.
        let anchor = shape.root_anchor_fret(target).unwrap();
        assert_eq!(
            fret_interval(shape.root_string, anchor).unwrap(),
            interval_from_c(target).unwrap()
        );
    }
}

#[test]
fn worked_transposition_cases() {
    let cases = [
        (
            'A',
            ChordQuality::Major,
            "C",
            [None, Some(3), Some(5), Some(5), Some(5), Some(3)],
        ),
        (
            'E',
            ChordQuality::Major,
            "G",
            [Some(3), Some(5), Some(5), Some(4), Some(3), Some(3)],
        ),
        (
            'E',
            ChordQuality::Minor,
            "E",
            [Some(0), Some(2), Some(2), Some(0), Some(0), Some(0)],
        ),
    ];

    for (letter, quality, target, expected) in cases {
        let shape = ChordShape::lookup(letter, quality).unwrap();
        assert_eq!(
            shape.transpose(target).unwrap(),
            expected,
            "{letter} {quality} shape at {target}"
        );
    }
}

#[test]
fn enharmonic_targets_transpose_identically() {
    let shape = ChordShape::lookup('A', ChordQuality::Major).unwrap();
    assert_eq!(
        shape.transpose("C#").unwrap(),
        shape.transpose("Db").unwrap()
    );
}
