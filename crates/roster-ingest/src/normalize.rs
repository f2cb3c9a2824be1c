//! Cell text normalization.

use crate::document::Cell;

/// Trimmed rendered text of a cell; empty for an absent cell.
pub fn cell_text(cell: Option<&Cell>) -> String {
    cell.map(|cell| cell.text.trim().to_string())
        .unwrap_or_default()
}

/// Splits a cell into its non-blank, trimmed lines.
pub fn list_from_cell(cell: Option<&Cell>) -> Vec<String> {
    split_lines(&cell_text(cell))
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercases and drops all whitespace, for header key comparison.
pub fn compact_lower(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
