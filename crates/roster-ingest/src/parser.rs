//! Roster assembly: table selection and merging of the section parsers.

use std::fmt;
use std::path::Path;

use roster_model::{ColumnKeys, Dialect, Roster, RoomRange};

use crate::dates::{Clock, DateResolver, SystemClock, format_date};
use crate::document::{Document, Row};
use crate::error::{IngestError, Result};
use crate::extract::or_else;
use crate::grid::parse_grid;
use crate::info::{InfoBlock, parse_info_block};
use crate::markers::Markers;

/// A dialect compiled for parsing, plus the clock used for the date fallback.
///
/// Parsing never mutates the parser, so one instance can serve any number of
/// documents.
pub struct RosterParser {
    markers: Markers,
    dates: DateResolver,
    columns: ColumnKeys,
    rooms: RoomRange,
    clock: Box<dyn Clock + Send + Sync>,
}

impl fmt::Debug for RosterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterParser")
            .field("rooms", &self.rooms)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl RosterParser {
    /// Compiles `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Model`] for an inverted room range and
    /// [`IngestError::InvalidPattern`] for a marker token or date pattern that
    /// does not compile.
    pub fn new(dialect: &Dialect) -> Result<Self> {
        dialect.rooms.validate()?;
        Ok(Self {
            markers: Markers::compile(&dialect.markers)?,
            dates: DateResolver::compile(&dialect.patterns)?,
            columns: dialect.columns.clone(),
            rooms: dialect.rooms,
            clock: Box::new(SystemClock),
        })
    }

    /// Replaces the clock consulted when a document carries no date.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Extracts a roster from a converted document.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingGridHeader`] when no content row carries
    /// both a room and a patient label. Every other gap in the document
    /// resolves to an empty field.
    pub fn parse(&self, document: &Document) -> Result<Roster> {
        tracing::debug!(
            tables = document.tables.len(),
            rows = document.row_count(),
            "parsing document"
        );
        let metadata = self.metadata_table(document);
        let info = metadata
            .map(|index| parse_info_block(&document.tables[index], &self.markers, &self.dates))
            .unwrap_or_default();

        let content: Vec<&Row> = document
            .tables
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != metadata)
            .flat_map(|(_, table)| table.rows.iter())
            .collect();
        tracing::debug!(rows = content.len(), "content rows collected");

        let grid = parse_grid(&content, &self.markers, &self.columns, self.rooms)?;
        let date = self.date(&info, document);

        let InfoBlock {
            pcts_day,
            pcts_night,
            charge_nurses,
            ..
        } = info;
        Ok(Roster {
            date,
            pcts_day,
            pcts_night,
            charge_nurses,
            assignments: grid.assignments,
            floats: grid.floats,
            respiratory: grid.respiratory,
        })
    }

    /// Parses converted markup.
    ///
    /// # Errors
    ///
    /// See [`RosterParser::parse`].
    pub fn parse_html(&self, markup: &str) -> Result<Roster> {
        self.parse(&Document::from_html(markup))
    }

    /// Reads and parses a converted markup file.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::FileNotFound`] or [`IngestError::FileRead`] when
    /// the file cannot be read, and otherwise see [`RosterParser::parse`].
    pub fn parse_file(&self, path: &Path) -> Result<Roster> {
        let markup = std::fs::read_to_string(path).map_err(|err| IngestError::read(path, err))?;
        tracing::debug!(path = %path.display(), bytes = markup.len(), "read markup file");
        self.parse_html(&markup)
    }

    /// Index of the first table mentioning the lead-nurse marker, else the
    /// first table.
    fn metadata_table(&self, document: &Document) -> Option<usize> {
        let found = document
            .tables
            .iter()
            .position(|table| self.markers.charge.is_match(&table.text()));
        match found {
            Some(index) => {
                tracing::debug!(table = index, "metadata table selected");
                Some(index)
            }
            None if document.tables.is_empty() => None,
            None => {
                tracing::warn!("no table mentions a lead nurse; using the first table as metadata");
                Some(0)
            }
        }
    }

    /// Metadata date, else any date in the document, else today.
    fn date(&self, info: &InfoBlock, document: &Document) -> String {
        let found = info.date.or_else(|| {
            let date = self.dates.find(&document.text());
            if let Some(date) = date {
                tracing::debug!(%date, "shift date found outside the metadata block");
            }
            date
        });
        format_date(or_else("date", found, || self.clock.today()))
    }
}

/// Parses `document` with the default dialect and the system clock.
///
/// # Errors
///
/// Returns [`IngestError::MissingGridHeader`] when the assignment grid cannot
/// be located.
pub fn parse_roster(document: &Document) -> Result<Roster> {
    RosterParser::new(&Dialect::default())?.parse(document)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dates::FixedClock;
    use crate::document::Table;

    fn parser() -> RosterParser {
        let today = NaiveDate::from_ymd_opt(2030, 1, 2).unwrap();
        RosterParser::new(&Dialect::default())
            .unwrap()
            .with_clock(FixedClock(today))
    }

    fn grid_table() -> Table {
        Table::new(vec![
            Row::from_texts(["ROOM", "PATIENT", "RN DAYS"]),
            Row::from_texts(["512", "J. Doe", "#7502"]),
        ])
    }

    #[test]
    fn test_metadata_table_by_marker() {
        let document = Document::new(vec![
            grid_table(),
            Table::new(vec![Row::from_texts(["CHARGE NURSE: #7501", "7A-7P"])]),
        ]);
        let roster = parser().parse(&document).unwrap();
        assert_eq!(roster.charge_nurses.day, "#7501");
        assert_eq!(roster.assignment("512").unwrap().rn_day, "#7502");
    }

    #[test]
    fn test_metadata_fallback_to_first_table() {
        let document = Document::new(vec![
            Table::new(vec![Row::from_texts(["PCT DAY: Ann"])]),
            grid_table(),
        ]);
        let roster = parser().parse(&document).unwrap();
        assert_eq!(roster.pcts_day, "Ann");
        assert_eq!(roster.assignment("512").unwrap().patient, "J. Doe");
    }

    #[test]
    fn test_split_content_tables_are_flattened() {
        let document = Document::new(vec![
            Table::new(vec![Row::from_texts(["Charge RN 7P-7A: Kim"])]),
            Table::new(vec![Row::from_texts(["Room", "Patient"])]),
            Table::new(vec![Row::from_texts(["530", "Z. Last"])]),
        ]);
        let roster = parser().parse(&document).unwrap();
        assert_eq!(roster.charge_nurses.night, "Kim");
        assert_eq!(roster.assignment("530").unwrap().patient, "Z. Last");
    }

    #[test]
    fn test_date_precedence() {
        let metadata = Table::new(vec![
            Row::from_texts(["Friday, April 4th, 2025"]),
            Row::from_texts(["Charge Nurse Day: #1"]),
        ]);
        let document = Document::new(vec![metadata, grid_table()]);
        assert_eq!(parser().parse(&document).unwrap().date, "2025-04-04");

        let mut content = grid_table();
        content.rows.push(Row::from_texts(["Printed 2025-05-06"]));
        let document = Document::new(vec![
            Table::new(vec![Row::from_texts(["Charge Nurse Day: #1"])]),
            content,
        ]);
        assert_eq!(parser().parse(&document).unwrap().date, "2025-05-06");

        let document = Document::new(vec![
            Table::new(vec![Row::from_texts(["Charge Nurse Day: #1"])]),
            grid_table(),
        ]);
        assert_eq!(parser().parse(&document).unwrap().date, "2030-01-02");
    }

    #[test]
    fn test_empty_document_is_missing_header() {
        let err = parser().parse(&Document::default()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingGridHeader {
                rows_scanned: 0,
                best_candidate: None
            }
        ));
    }

    #[test]
    fn test_inverted_room_range_is_rejected() {
        let dialect = Dialect {
            rooms: RoomRange { start: 10, end: 1 },
            ..Dialect::default()
        };
        assert!(matches!(
            RosterParser::new(&dialect),
            Err(IngestError::Model(_))
        ));
    }

    #[test]
    fn test_invalid_date_pattern_is_rejected() {
        let mut dialect = Dialect::default();
        dialect.patterns.iso = "(".to_string();
        let err = RosterParser::new(&dialect).unwrap_err();
        assert!(matches!(err, IngestError::InvalidPattern { ref name, .. } if name == "iso"));
    }
}
