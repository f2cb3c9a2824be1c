//! Semantic identifiers shared by the grid parser and the exporters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A staffing shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::Day, Shift::Night];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One column of the room assignment grid.
///
/// Declaration order is the canonical column order used for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridField {
    Room,
    Precaution,
    Patient,
    Mrn,
    Status,
    RnDay,
    ExtDay,
    RnNight,
    ExtNight,
}

impl GridField {
    pub const ALL: [GridField; 9] = [
        GridField::Room,
        GridField::Precaution,
        GridField::Patient,
        GridField::Mrn,
        GridField::Status,
        GridField::RnDay,
        GridField::ExtDay,
        GridField::RnNight,
        GridField::ExtNight,
    ];

    /// Stable snake_case name, used as the CSV column header.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Precaution => "precaution",
            Self::Patient => "patient",
            Self::Mrn => "mrn",
            Self::Status => "status",
            Self::RnDay => "rn_day",
            Self::ExtDay => "ext_day",
            Self::RnNight => "rn_night",
            Self::ExtNight => "ext_night",
        }
    }

    /// Short human-readable heading.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Room => "Room",
            Self::Precaution => "Prec",
            Self::Patient => "Patient",
            Self::Mrn => "MRN",
            Self::Status => "Status",
            Self::RnDay => "RN Day",
            Self::ExtDay => "Ext Day",
            Self::RnNight => "RN Night",
            Self::ExtNight => "Ext Night",
        }
    }
}

impl fmt::Display for GridField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
