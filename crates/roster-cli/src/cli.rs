//! CLI argument definitions for the roster tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::RoomRange;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Extract a staffing roster from a converted unit assignment sheet",
    long_about = "Extract a staffing roster from a unit assignment sheet converted to HTML.\n\n\
                  Recovers the shift date, lead nurses, support staff, the room-by-room\n\
                  assignment grid and the float and respiratory lists."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient and staff values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a converted roster document.
    Parse(ParseArgs),

    /// Print the built-in dialect as TOML, as a starting point for a custom one.
    Dialect,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Converted roster document (HTML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dialect file describing a different template family.
    #[arg(long = "dialect", value_name = "PATH")]
    pub dialect: Option<PathBuf>,

    /// Room range covered by the grid, e.g. 501-532 (overrides the dialect).
    #[arg(long = "rooms", value_name = "LO-HI", value_parser = parse_rooms)]
    pub rooms: Option<RoomRange>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "summary")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Summary,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_rooms(value: &str) -> Result<RoomRange, String> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| format!("expected LO-HI, got `{value}`"))?;
    let start: u32 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid room number `{start}`"))?;
    let end: u32 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid room number `{end}`"))?;
    RoomRange::new(start, end).map_err(|err| err.to_string())
}
