//! Footer lists: reassigned (float) staff per shift and support therapists.

use roster_model::FloatStaff;

use crate::document::Row;
use crate::extract::{ShiftSlots, or_default};
use crate::markers::Markers;
use crate::normalize::list_from_cell;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterLists {
    pub floats: FloatStaff,
    pub respiratory: Vec<String>,
}

/// Collects footer lists from the rows following the assignment grid.
///
/// A row naming the float marker and a shift fills that shift's list; a row
/// naming the respiratory marker fills the therapist list. Rows that yield
/// no names leave earlier lists untouched.
pub fn parse_footer(rows: &[&Row], markers: &Markers) -> FooterLists {
    let mut floats = ShiftSlots::default();
    let mut respiratory = None;
    for row in rows {
        let text = row.text();
        if markers.float.is_match(&text) {
            for shift in markers.shifts_in(&text) {
                let names = names_in(row, markers, |cell| {
                    markers.float.is_match(cell) && markers.shift(shift).is_match(cell)
                });
                if !names.is_empty() {
                    tracing::debug!(%shift, count = names.len(), "float staff found");
                    floats.set(shift, names);
                }
            }
        }
        if markers.respiratory.is_match(&text) {
            let names = names_in(row, markers, |cell| markers.respiratory.is_match(cell));
            if !names.is_empty() {
                tracing::debug!(count = names.len(), "respiratory staff found");
                respiratory = Some(names);
            }
        }
    }
    FooterLists {
        floats: FloatStaff {
            day: or_default("floats.day", floats.day),
            night: or_default("floats.night", floats.night),
        },
        respiratory: or_default("respiratory", respiratory),
    }
}

/// Names listed in the row, one per line.
///
/// Reading starts at the first cell satisfying `labelled` (the first cell
/// when none does) and moves right past cells that hold only label lines.
fn names_in(row: &Row, markers: &Markers, labelled: impl Fn(&str) -> bool) -> Vec<String> {
    let start = row
        .cells
        .iter()
        .position(|cell| labelled(&cell.text))
        .unwrap_or(0);
    row.cells
        .iter()
        .skip(start)
        .map(|cell| {
            list_from_cell(Some(cell))
                .into_iter()
                .filter(|line| !is_label_line(line, markers))
                .collect::<Vec<_>>()
        })
        .find(|names| !names.is_empty())
        .unwrap_or_default()
}

/// Section titles and bare shift tokens are labels, not names.
fn is_label_line(line: &str, markers: &Markers) -> bool {
    markers.is_footer(line) || only_shift_tokens(line, markers)
}

fn only_shift_tokens(line: &str, markers: &Markers) -> bool {
    let mut rest = line.trim_matches(separator);
    if rest.is_empty() {
        return true;
    }
    while let Some(end) = markers.leading_shift(rest) {
        rest = rest[end..].trim_matches(separator);
        if rest.is_empty() {
            return true;
        }
    }
    false
}

fn separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, ':' | '-' | '(' | ')' | ',' | '/')
}

/// True when any cell of the row opens a footer section.
pub(crate) fn opens_footer(row: &Row, markers: &Markers) -> bool {
    markers.is_footer(&row.text())
}
