//! Try-extract, else default.
//!
//! Every optional roster field is produced by an independent extraction step
//! that yields `Option<T>`; a miss resolves to the field's documented default
//! and is logged so degraded documents remain diagnosable.

use roster_model::Shift;

/// Returns the extracted value, or `T::default()` when nothing was found.
pub(crate) fn or_default<T: Default>(field: &'static str, extracted: Option<T>) -> T {
    or_else(field, extracted, T::default)
}

/// Returns the extracted value, or the fallback when nothing was found.
pub(crate) fn or_else<T>(field: &'static str, extracted: Option<T>, fallback: impl FnOnce() -> T) -> T {
    match extracted {
        Some(value) => value,
        None => {
            tracing::debug!(field, "field not found, using default");
            fallback()
        }
    }
}

/// Per-shift extraction results, each resolved independently.
#[derive(Debug)]
pub(crate) struct ShiftSlots<T> {
    pub(crate) day: Option<T>,
    pub(crate) night: Option<T>,
}

impl<T> Default for ShiftSlots<T> {
    fn default() -> Self {
        Self {
            day: None,
            night: None,
        }
    }
}

impl<T> ShiftSlots<T> {
    pub(crate) fn set(&mut self, shift: Shift, value: T) {
        match shift {
            Shift::Day => self.day = Some(value),
            Shift::Night => self.night = Some(value),
        }
    }
}
