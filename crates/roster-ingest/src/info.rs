//! Metadata block parsing: shift date, support staff, lead nurses.
//!
//! Each row is inspected independently, so a row may satisfy several rules
//! and day/night details may be spread over any number of rows. A rule is
//! evaluated per cell when a single cell carries both its marker and a shift
//! token and yields a value there, and against the whole row text otherwise.

use chrono::NaiveDate;
use roster_model::{ChargeNurses, Shift};

use crate::dates::DateResolver;
use crate::document::{Row, Table};
use crate::extract::{ShiftSlots, or_default};
use crate::markers::{Markers, TokenSet};
use crate::normalize::split_lines;

/// Fields recovered from the metadata block. Missing text fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoBlock {
    pub date: Option<NaiveDate>,
    pub pcts_day: String,
    pub pcts_night: String,
    pub charge_nurses: ChargeNurses,
}

pub fn parse_info_block(table: &Table, markers: &Markers, dates: &DateResolver) -> InfoBlock {
    let mut date = None;
    let mut pcts = ShiftSlots::default();
    let mut charge = ShiftSlots::default();

    for (index, row) in table.rows.iter().enumerate() {
        let text = row.text();

        if date.is_none() && dates.mentions_weekday(&text) {
            date = dates.find(&text);
            if let Some(date) = date {
                tracing::debug!(row = index, %date, "shift date found in metadata block");
            }
        }

        for (shift, value) in rule_values(row, &text, &markers.support_staff, markers, staff_text)
        {
            pcts.set(shift, value);
        }

        let charge_values = rule_values(row, &text, &markers.charge, markers, |segment| {
            charge_identifier(segment, markers)
        });
        for (shift, value) in charge_values {
            tracing::debug!(row = index, %shift, "lead nurse found");
            charge.set(shift, value);
        }
    }

    InfoBlock {
        date,
        pcts_day: or_default("pcts_day", pcts.day),
        pcts_night: or_default("pcts_night", pcts.night),
        charge_nurses: ChargeNurses {
            day: or_default("charge_nurses.day", charge.day),
            night: or_default("charge_nurses.night", charge.night),
        },
    }
}

/// Values a rule yields for `row`.
///
/// Cells carrying both the rule's marker and a shift token are evaluated on
/// their own. A shift such a cell names without yielding a value (a label
/// cell followed by a value cell) is read from the whole row text, as is
/// every shift when no single cell carries the rule.
fn rule_values(
    row: &Row,
    row_text: &str,
    marker: &TokenSet,
    markers: &Markers,
    extract: impl Fn(&str) -> Option<String>,
) -> Vec<(Shift, String)> {
    let carries_rule = |text: &str| marker.is_match(text) && !markers.shifts_in(text).is_empty();
    let cells: Vec<&str> = row
        .cells
        .iter()
        .map(|cell| cell.text.as_str())
        .filter(|text| carries_rule(*text))
        .collect();
    if cells.is_empty() {
        return if carries_rule(row_text) {
            shift_values(row_text, marker, markers, &extract)
        } else {
            Vec::new()
        };
    }

    let mut values: Vec<(Shift, String)> = cells
        .iter()
        .flat_map(|text| shift_values(text, marker, markers, &extract))
        .collect();
    let unresolved: Vec<Shift> = cells
        .iter()
        .flat_map(|text| markers.shifts_in(text))
        .filter(|shift| values.iter().all(|(found, _)| found != shift))
        .collect();
    if !unresolved.is_empty() {
        values.extend(
            shift_values(row_text, marker, markers, &extract)
                .into_iter()
                .filter(|(shift, _)| unresolved.contains(shift)),
        );
    }
    values
}

/// Extracts one value per shift mentioned in `scope`.
///
/// The segment after a marker occurrence that names a shift belongs to that
/// shift. When no segment names any shift (the shift token sits before the
/// marker), the first segment serves every shift the scope mentions.
fn shift_values(
    scope: &str,
    marker: &TokenSet,
    markers: &Markers,
    extract: impl Fn(&str) -> Option<String>,
) -> Vec<(Shift, String)> {
    let segments = marker.segments(scope);
    let any_named = segments
        .iter()
        .any(|segment| !markers.shifts_in(segment).is_empty());

    markers
        .shifts_in(scope)
        .into_iter()
        .filter_map(|shift| {
            let value = if any_named {
                segments.iter().find_map(|segment| {
                    let token = markers.shift(shift).find(segment)?;
                    let before = &segment[..token.start()];
                    let after = &segment[token.end()..];
                    extract(before).or_else(|| extract(after))
                })
            } else {
                segments.first().and_then(|segment| extract(segment))
            };
            value.map(|value| (shift, value))
        })
        .collect()
}

/// Support staff text block, edge punctuation stripped, lines kept.
fn staff_text(segment: &str) -> Option<String> {
    let lines: Vec<String> = split_lines(segment)
        .into_iter()
        .map(|line| line.trim_matches(is_separator).to_string())
        .filter(|line| !line.is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// The identifier immediately after the marker: word characters with an
/// optional leading `#`. Shift tokens directly after the marker are skipped.
fn charge_identifier(segment: &str, markers: &Markers) -> Option<String> {
    let mut rest = segment.trim_start_matches(is_separator);
    while let Some(end) = markers.leading_shift(rest) {
        rest = rest[end..].trim_start_matches(is_separator);
    }
    let body = rest.strip_prefix('#').unwrap_or(rest);
    let word_len = body
        .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .unwrap_or(body.len());
    if word_len == 0 {
        return None;
    }
    let prefix_len = rest.len() - body.len();
    Some(rest[..prefix_len + word_len].to_string())
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, ':' | '-' | '(' | ')' | ',' | '|' | '/' | '.' | '=')
}
