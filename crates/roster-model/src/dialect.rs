//! Document dialect configuration.
//!
//! A dialect describes one template family: which rooms the grid covers, which
//! tokens identify labels and sections, which header keys identify each grid
//! column, and which textual date patterns are recognized. Recognizing a
//! different template is a matter of constructing a different `Dialect`; the
//! parsing logic never changes.
//!
//! Every section is `#[serde(default)]`, so a dialect file only needs to list
//! what differs from [`Dialect::default`].

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::GridField;

/// Full dialect description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    pub rooms: RoomRange,
    pub markers: MarkerTokens,
    pub columns: ColumnKeys,
    pub patterns: DatePatterns,
}

impl Dialect {
    /// Returns a copy of this dialect covering a different room range.
    #[must_use]
    pub fn with_rooms(mut self, rooms: RoomRange) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Inclusive range of room numbers covered by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRange {
    pub start: u32,
    pub end: u32,
}

impl Default for RoomRange {
    fn default() -> Self {
        Self {
            start: 501,
            end: 532,
        }
    }
}

impl RoomRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRoomRange`] when `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Checks the range after deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRoomRange`] when `start > end`.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(ModelError::InvalidRoomRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of rooms in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, room: u32) -> bool {
        (self.start..=self.end).contains(&room)
    }

    /// Slot index of `room`, if it lies in the range.
    #[must_use]
    pub fn offset(&self, room: u32) -> Option<usize> {
        self.contains(room).then(|| (room - self.start) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + use<> {
        self.start..=self.end
    }
}

/// Marker tokens recognized in row text.
///
/// Tokens match case-insensitively at a word start; a space inside a token
/// matches any run of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerTokens {
    /// Grid header label for the room column.
    pub room: Vec<String>,
    /// Grid header label for the patient column.
    pub patient: Vec<String>,
    /// Footer section carrying reassigned staff.
    pub float: Vec<String>,
    /// Footer section carrying support therapists.
    pub respiratory: Vec<String>,
    /// Lead nurse label; the identifier follows it.
    pub charge: Vec<String>,
    /// Support staff label in the metadata block.
    pub support_staff: Vec<String>,
    pub day_shift: Vec<String>,
    pub night_shift: Vec<String>,
}

impl Default for MarkerTokens {
    fn default() -> Self {
        Self {
            room: tokens(&["room"]),
            patient: tokens(&["patient"]),
            float: tokens(&["float"]),
            respiratory: tokens(&["respiratory"]),
            charge: tokens(&["charge nurse", "charge rn"]),
            support_staff: tokens(&["pct"]),
            day_shift: tokens(&["day", "7a-7p"]),
            night_shift: tokens(&["night", "7p-7a"]),
        }
    }
}

/// Header keys per grid column.
///
/// A header cell matches a key when its lowercased, whitespace-free text
/// contains the key (normalized the same way).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnKeys {
    pub room: Vec<String>,
    pub precaution: Vec<String>,
    pub patient: Vec<String>,
    pub mrn: Vec<String>,
    pub status: Vec<String>,
    pub rn_day: Vec<String>,
    pub ext_day: Vec<String>,
    pub rn_night: Vec<String>,
    pub ext_night: Vec<String>,
}

impl Default for ColumnKeys {
    fn default() -> Self {
        Self {
            room: tokens(&["room"]),
            precaution: tokens(&["prec", "isolation"]),
            patient: tokens(&["patient"]),
            mrn: tokens(&["mrn", "medicalrecord"]),
            status: tokens(&["status"]),
            rn_day: tokens(&["rnday"]),
            ext_day: tokens(&["extday", "dayext"]),
            rn_night: tokens(&["rnnight"]),
            ext_night: tokens(&["extnight", "nightext"]),
        }
    }
}

impl ColumnKeys {
    #[must_use]
    pub fn keys(&self, field: GridField) -> &[String] {
        match field {
            GridField::Room => &self.room,
            GridField::Precaution => &self.precaution,
            GridField::Patient => &self.patient,
            GridField::Mrn => &self.mrn,
            GridField::Status => &self.status,
            GridField::RnDay => &self.rn_day,
            GridField::ExtDay => &self.ext_day,
            GridField::RnNight => &self.rn_night,
            GridField::ExtNight => &self.ext_night,
        }
    }

    /// `(field, keys)` pairs in canonical column order.
    pub fn entries(&self) -> impl Iterator<Item = (GridField, &[String])> {
        GridField::ALL
            .into_iter()
            .map(move |field| (field, self.keys(field)))
    }
}

/// Regular expressions used to recover the shift date.
///
/// `long_form`, `iso` and `slash` must define the named groups `year`,
/// `month` and `day`. `ordinal_suffix` is replaced by its first group before
/// the long form is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePatterns {
    /// Row-level trigger: a row mentioning a weekday may carry the date.
    pub weekday: String,
    pub long_form: String,
    pub iso: String,
    pub slash: String,
    pub ordinal_suffix: String,
}

impl Default for DatePatterns {
    fn default() -> Self {
        Self {
            weekday: r"(?i)\b(?:mon|tues?|wed(?:nes)?|thu(?:rs?)?|fri|sat(?:ur)?|sun)(?:day)?\b".to_string(),
            long_form: r"(?i)\b(?:mon|tues?|wed(?:nes)?|thu(?:rs?)?|fri|sat(?:ur)?|sun)(?:day)?\.?,?\s+(?P<month>[a-z]{3,9})\.?\s+(?P<day>\d{1,2}(?:st|nd|rd|th)?),?\s+(?P<year>\d{4})\b".to_string(),
            iso: r"\b(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})\b".to_string(),
            slash: r"\b(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{4}|\d{2})\b".to_string(),
            ordinal_suffix: r"(?i)(\d)(?:st|nd|rd|th)\b".to_string(),
        }
    }
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
