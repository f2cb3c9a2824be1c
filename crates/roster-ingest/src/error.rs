//! Error types for roster extraction.

use std::path::PathBuf;

use roster_model::ModelError;
use thiserror::Error;

/// Errors that can occur while configuring or running roster extraction.
///
/// Only [`IngestError::MissingGridHeader`] is raised by parsing itself; every
/// other malformed-input condition resolves to a documented default.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Parse Errors ===
    /// No row mentions both the room and patient labels.
    #[error(
        "could not locate the assignment grid header: none of {rows_scanned} rows mentions both a room and a patient label{}",
        best_candidate_hint(.best_candidate)
    )]
    MissingGridHeader {
        rows_scanned: usize,
        /// Best partial match as `(1-based row number, labels matched)`.
        best_candidate: Option<(usize, usize)>,
    },

    // === Configuration Errors ===
    /// A dialect pattern failed to compile or lacks required groups.
    #[error("invalid {name} pattern: {reason}")]
    InvalidPattern { name: String, reason: String },

    /// Room range or other model-level validation failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Dialect file is not valid TOML for the dialect schema.
    #[error("failed to parse dialect file {path}: {source}")]
    DialectToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // === File System Errors ===
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn pattern(name: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn best_candidate_hint(best: &Option<(usize, usize)>) -> String {
    match best {
        Some((row, matched)) => format!(" (closest was row {row}, matching {matched} label)"),
        None => String::new(),
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
