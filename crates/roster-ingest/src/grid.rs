//! Assignment grid reconstruction.
//!
//! The grid header is the first row mentioning both a room label and a
//! patient label. Body rows run from there to the first footer row and are
//! placed by room number into a fixed, room-indexed sequence; rows whose room
//! cell is blank, non-numeric or outside the configured range are skipped.

use roster_model::{
    AssignmentRow, ColumnKeys, FloatStaff, GridField, RoomRange, vacant_assignments,
};

use crate::document::Row;
use crate::error::{IngestError, Result};
use crate::footer::{opens_footer, parse_footer};
use crate::headers::{ColumnMap, map_headers};
use crate::markers::Markers;
use crate::normalize::cell_text;

/// Grid and footer content recovered from the content rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSection {
    pub assignments: Vec<AssignmentRow>,
    pub floats: FloatStaff,
    pub respiratory: Vec<String>,
}

/// Header-row candidate: how many of the two labels a row mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CandidateScore {
    matched: usize,
    index: usize,
}

/// Parses the assignment grid and the footer lists following it.
///
/// # Errors
///
/// Returns [`IngestError::MissingGridHeader`] when no row mentions both a
/// room and a patient label.
pub fn parse_grid(
    rows: &[&Row],
    markers: &Markers,
    columns: &ColumnKeys,
    rooms: RoomRange,
) -> Result<GridSection> {
    let header_index = find_header(rows, markers)?;
    let headers: Vec<String> = rows[header_index]
        .cells
        .iter()
        .map(|cell| cell_text(Some(cell)))
        .collect();
    let map = map_headers(&headers, columns.entries());
    log_mapping(header_index, &map);

    let body_start = header_index + 1;
    let body_end = rows[body_start..]
        .iter()
        .position(|row| opens_footer(row, markers))
        .map_or(rows.len(), |offset| body_start + offset);
    tracing::debug!(body_start, body_end, "grid body extent");

    let mut assignments = vacant_assignments(rooms);
    let mut placed = 0usize;
    for (index, row) in rows.iter().enumerate().take(body_end).skip(body_start) {
        let room_text = map.text(GridField::Room, row);
        let Some(room) = parse_room(&room_text) else {
            tracing::trace!(row = index, "skipping row without a room number");
            continue;
        };
        let Some(slot) = rooms.offset(room) else {
            tracing::trace!(row = index, room, "skipping room outside the configured range");
            continue;
        };
        assignments[slot] = build_row(room, row, &map);
        placed += 1;
    }
    tracing::debug!(placed, rooms = rooms.len(), "assignment rows placed");

    let footer = parse_footer(&rows[body_end..], markers);
    Ok(GridSection {
        assignments,
        floats: footer.floats,
        respiratory: footer.respiratory,
    })
}

fn find_header(rows: &[&Row], markers: &Markers) -> Result<usize> {
    let mut best: Option<CandidateScore> = None;
    for (index, row) in rows.iter().enumerate() {
        let text = row.text();
        let matched = usize::from(markers.room.is_match(&text))
            + usize::from(markers.patient.is_match(&text));
        if matched == 2 {
            tracing::debug!(row = index, "grid header found");
            return Ok(index);
        }
        if matched > 0 && best.is_none_or(|best| matched > best.matched) {
            best = Some(CandidateScore { matched, index });
        }
    }
    Err(IngestError::MissingGridHeader {
        rows_scanned: rows.len(),
        best_candidate: best.map(|score| (score.index + 1, score.matched)),
    })
}

fn log_mapping(header_index: usize, map: &ColumnMap<GridField>) {
    let unmapped = map.unmapped();
    if unmapped.contains(&GridField::Room) {
        tracing::warn!(
            row = header_index,
            "grid header has no room column; no assignment rows can be placed"
        );
    }
    if !unmapped.is_empty() {
        let fields: Vec<&str> = unmapped.iter().map(|field| field.key()).collect();
        tracing::debug!(?fields, "grid columns not found, values default to empty");
    }
}

/// Room number from the leading digits of the cell, so `"512A"` is room 512.
pub(crate) fn parse_room(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let digits = text
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(text, |end| &text[..end]);
    digits.parse().ok()
}

fn build_row(room: u32, row: &Row, map: &ColumnMap<GridField>) -> AssignmentRow {
    let mut assignment = AssignmentRow::vacant(room);
    for field in GridField::ALL {
        if field != GridField::Room {
            assignment.set(field, map.text(field, row));
        }
    }
    assignment
}
