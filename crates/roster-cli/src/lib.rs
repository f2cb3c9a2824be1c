//! Library components of the `roster` command-line tool.

pub mod export;
pub mod logging;
