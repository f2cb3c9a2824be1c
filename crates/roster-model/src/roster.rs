//! Parsed roster value types.

use serde::{Deserialize, Serialize};

use crate::dialect::RoomRange;
use crate::field::{GridField, Shift};

/// One physical room's patient and nurse binding.
///
/// Every field except `room` is free text copied from the source cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub room: String,
    pub precaution: String,
    pub patient: String,
    pub mrn: String,
    pub status: String,
    pub rn_day: String,
    pub ext_day: String,
    pub rn_night: String,
    pub ext_night: String,
}

impl AssignmentRow {
    /// An unoccupied slot for `room`.
    #[must_use]
    pub fn vacant(room: u32) -> Self {
        Self {
            room: room.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, field: GridField) -> &str {
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

    pub fn set(&mut self, field: GridField, value: String) {
        let slot = match field {
            GridField::Room => &mut self.room,
            GridField::Precaution => &mut self.precaution,
            GridField::Patient => &mut self.patient,
            GridField::Mrn => &mut self.mrn,
            GridField::Status => &mut self.status,
            GridField::RnDay => &mut self.rn_day,
            GridField::ExtDay => &mut self.ext_day,
            GridField::RnNight => &mut self.rn_night,
            GridField::ExtNight => &mut self.ext_night,
        };
        *slot = value;
    }

    /// True when any field other than `room` carries text.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        GridField::ALL
            .iter()
            .filter(|field| **field != GridField::Room)
            .any(|field| !self.get(*field).is_empty())
    }
}

/// Lead nurse per shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeNurses {
    pub day: String,
    pub night: String,
}

impl ChargeNurses {
    #[must_use]
    pub fn get(&self, shift: Shift) -> &str {
        match shift {
            Shift::Day => &self.day,
            Shift::Night => &self.night,
        }
    }
}

/// Reassigned (float) staff per shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatStaff {
    pub day: Vec<String>,
    pub night: Vec<String>,
}

impl FloatStaff {
    #[must_use]
    pub fn get(&self, shift: Shift) -> &[String] {
        match shift {
            Shift::Day => &self.day,
            Shift::Night => &self.night,
        }
    }
}

/// One shift period's complete staffing record.
///
/// `assignments` always holds exactly one row per room of the configured
/// range, in ascending room order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Canonical `YYYY-MM-DD` date.
    pub date: String,
    pub pcts_day: String,
    pub pcts_night: String,
    pub charge_nurses: ChargeNurses,
    pub assignments: Vec<AssignmentRow>,
    pub floats: FloatStaff,
    pub respiratory: Vec<String>,
}

impl Roster {
    /// An empty roster with one vacant slot per room in `rooms`.
    #[must_use]
    pub fn empty(date: impl Into<String>, rooms: RoomRange) -> Self {
        Self {
            date: date.into(),
            pcts_day: String::new(),
            pcts_night: String::new(),
            charge_nurses: ChargeNurses::default(),
            assignments: vacant_assignments(rooms),
            floats: FloatStaff::default(),
            respiratory: Vec::new(),
        }
    }

    /// Support-staff text block for the given shift.
    #[must_use]
    pub fn pcts(&self, shift: Shift) -> &str {
        match shift {
            Shift::Day => &self.pcts_day,
            Shift::Night => &self.pcts_night,
        }
    }

    /// Looks up a room's row by room number string.
    #[must_use]
    pub fn assignment(&self, room: &str) -> Option<&AssignmentRow> {
        self.assignments.iter().find(|row| row.room == room)
    }

    /// Rows that carry any patient or staffing data.
    pub fn occupied(&self) -> impl Iterator<Item = &AssignmentRow> {
        self.assignments.iter().filter(|row| row.is_occupied())
    }
}

/// One vacant row per room, ascending.
#[must_use]
pub fn vacant_assignments(rooms: RoomRange) -> Vec<AssignmentRow> {
    rooms.iter().map(AssignmentRow::vacant).collect()
}
