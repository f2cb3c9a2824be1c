//! Dialect file loading.

use std::path::Path;

use roster_model::Dialect;

use crate::error::{IngestError, Result};

/// Loads a TOML dialect file. Sections and keys the file omits keep their
/// default values.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] or [`IngestError::FileRead`] when the
/// file cannot be read, [`IngestError::DialectToml`] when it does not match the
/// dialect schema, and [`IngestError::Model`] for an inverted room range.
pub fn load_dialect(path: &Path) -> Result<Dialect> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let dialect: Dialect = toml::from_str(&contents).map_err(|e| IngestError::DialectToml {
        path: path.to_path_buf(),
        source: e,
    })?;
    dialect.rooms.validate()?;
    tracing::debug!(
        path = %path.display(),
        rooms_start = dialect.rooms.start,
        rooms_end = dialect.rooms.end,
        "loaded dialect"
    );
    Ok(dialect)
}
