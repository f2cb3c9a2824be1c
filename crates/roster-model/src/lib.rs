//! Staffing roster data model.
//!
//! Value types produced by the roster extraction engine, plus the dialect
//! configuration that tells the engine which document template to expect.

pub mod dialect;
pub mod error;
pub mod field;
pub mod roster;

pub use dialect::{ColumnKeys, DatePatterns, Dialect, MarkerTokens, RoomRange};
pub use error::{ModelError, Result};
pub use field::{GridField, Shift};
pub use roster::{AssignmentRow, ChargeNurses, FloatStaff, Roster, vacant_assignments};
