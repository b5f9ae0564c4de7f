//! ASCII tab diagrams
//!
//! Renders per-string fret values as six text lines, string 1 (high E) on
//! top, each prefixed with the string's label. Fret cells are dash-padded so
//! single-digit frets align with double-digit frets.

use crate::fretboard::{string_label, STRING_COUNT};

/// One string's entry in a tab diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabValue {
    /// Press this fret; `Fret(0)` is the open string.
    Fret(u8),
    /// String not played, or not part of the question.
    Muted,
}

/// Render six per-string values, low string (6) first in `values`, as a
/// six-line diagram. Every value has a defined rendering; there are no
/// error conditions.
pub fn render(values: &[TabValue; STRING_COUNT]) -> String {
    let width = values
        .iter()
        .map(|value| match value {
            TabValue::Fret(fret) => digits(*fret),
            TabValue::Muted => 1,
        })
        .max()
        .unwrap_or(1);

    let mut lines = Vec::with_capacity(STRING_COUNT);
    for string in 1..=STRING_COUNT as u8 {
        let label = string_label(string);
        let line = match values[STRING_COUNT - string as usize] {
            TabValue::Fret(fret) => format!("{label} -{fret:-<width$}--"),
            TabValue::Muted => format!("{label} {}", "-".repeat(width + 3)),
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Diagram highlighting a single fretted string, everything else muted.
pub fn single_fret_diagram(string: u8, fret: u8) -> String {
    let mut values = [TabValue::Muted; STRING_COUNT];
    values[STRING_COUNT - string as usize] = TabValue::Fret(fret);
    render(&values)
}

/// Diagram for a full chord voicing, low string (6) first.
pub fn chord_diagram(frets: &[Option<u8>; STRING_COUNT]) -> String {
    let mut values = [TabValue::Muted; STRING_COUNT];
    for (value, &fret) in values.iter_mut().zip(frets.iter()) {
        if let Some(fret) = fret {
            *value = TabValue::Fret(fret);
        }
    }
    render(&values)
}

fn digits(fret: u8) -> usize {
    match fret {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}
