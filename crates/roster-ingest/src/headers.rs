//! Fuzzy header-to-column mapping.
//!
//! A header cell matches a key when its compacted text (lowercase, no
//! whitespace) contains the compacted key. Each field is resolved
//! independently: the first matching column wins, with no backtracking,
//! so label drift like `RN DAYS`, `RN Day's` or `RNDAY` needs no synonym
//! table.

use std::collections::BTreeMap;

use crate::document::{Cell, Row};
use crate::normalize::{cell_text, compact_lower};

/// Column index per semantic key, scoped to one header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap<K: Ord> {
    columns: BTreeMap<K, Option<usize>>,
}

impl<K: Ord + Copy> ColumnMap<K> {
    /// Column index for `key`, or `None` when no header matched.
    pub fn index(&self, key: K) -> Option<usize> {
        self.columns.get(&key).copied().flatten()
    }

    /// Trimmed text of `key`'s cell in `row`; empty when unmapped or absent.
    pub fn text(&self, key: K, row: &Row) -> String {
        cell_text(self.cell(key, row))
    }

    pub fn cell<'r>(&self, key: K, row: &'r Row) -> Option<&'r Cell> {
        self.index(key).and_then(|index| row.cell(index))
    }

    /// Keys that no header cell matched.
    pub fn unmapped(&self) -> Vec<K> {
        self.columns
            .iter()
            .filter(|(_, index)| index.is_none())
            .map(|(key, _)| *key)
            .collect()
    }
}

/// Maps each key to the first header whose compacted text contains any of
/// the key's aliases.
pub fn map_headers<'a, K, I>(headers: &[String], keys: I) -> ColumnMap<K>
where
    K: Ord + Copy,
    I: IntoIterator<Item = (K, &'a [String])>,
{
    let compact: Vec<String> = headers.iter().map(|h| compact_lower(h)).collect();
    let columns = keys
        .into_iter()
        .map(|(key, aliases)| {
            let aliases: Vec<String> = aliases
                .iter()
                .map(|alias| compact_lower(alias))
                .filter(|alias| !alias.is_empty())
                .collect();
            let index = compact
                .iter()
                .position(|header| aliases.iter().any(|alias| header.contains(alias.as_str())));
            (key, index)
        })
        .collect();
    ColumnMap { columns }
}
