//! Staffing roster extraction from converted office documents.
//!
//! The documents are hand-maintained files with no enforced schema; after
//! conversion to markup they arrive as a tree of tables, rows and cells. This
//! crate infers which table is the metadata block, which rows form the
//! room-by-room assignment grid and which trailing rows carry the footer
//! lists, and rebuilds a fixed-size [`Roster`](roster_model::Roster) from them.
//!
//! # Features
//!
//! - **Input tree**: [`Document`] built directly or from markup with [`Document::from_html`]
//! - **Dialects**: marker tokens, column keys, room range and date patterns as data ([`load_dialect`])
//! - **Graceful degradation**: only a missing grid header fails a parse
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{RosterParser, load_dialect};
//!
//! let dialect = load_dialect(Path::new("dialect.toml"))?;
//! let parser = RosterParser::new(&dialect)?;
//! let roster = parser.parse_file(Path::new("roster.html"))?;
//! println!("{} rooms occupied", roster.occupied().count());
//! ```

mod config;
mod dates;
mod document;
mod error;
mod extract;
mod footer;
mod grid;
mod headers;
mod html;
mod info;
mod markers;
mod normalize;
mod parser;

// === Error Types ===
pub use error::{IngestError, Result};

// === Input Tree ===
pub use document::{Cell, CellKind, Document, Row, Table};
pub use html::rendered_text;

// === Configuration ===
pub use config::load_dialect;
pub use markers::{Markers, TokenSet};

// === Entry Points ===
pub use parser::{RosterParser, parse_roster};

// === Components ===
pub use dates::{Clock, DateResolver, FixedClock, SystemClock, find_date, format_date, resolve_date};
pub use footer::{FooterLists, parse_footer};
pub use grid::{GridSection, parse_grid};
pub use headers::{ColumnMap, map_headers};
pub use info::{InfoBlock, parse_info_block};
pub use normalize::{cell_text, compact_lower, list_from_cell};
