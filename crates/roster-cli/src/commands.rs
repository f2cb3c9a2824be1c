use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use roster_cli::export::{write_csv, write_json};
use roster_cli::logging::redact_value;
use roster_ingest::{IngestError, RosterParser, load_dialect};
use roster_model::{Dialect, Roster};
use tracing::{info, info_span, trace};

use crate::cli::{OutputFormatArg, ParseArgs};
use crate::summary::render_summary;

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let span = info_span!("parse", file = %args.file.display());
    let _guard = span.enter();

    let mut dialect = match &args.dialect {
        Some(path) => load_dialect(path)
            .with_context(|| format!("load dialect {}", path.display()))?,
        None => Dialect::default(),
    };
    if let Some(rooms) = args.rooms {
        dialect = dialect.with_rooms(rooms);
    }
    let parser = RosterParser::new(&dialect).context("compile dialect")?;
    let roster = parse_document(&parser, &args.file)?;
    info!(
        date = %roster.date,
        occupied = roster.occupied().count(),
        rooms = roster.assignments.len(),
        "roster extracted"
    );
    for row in roster.occupied() {
        trace!(
            room = %row.room,
            patient = redact_value(&row.patient),
            rn_day = redact_value(&row.rn_day),
            rn_night = redact_value(&row.rn_night),
            "assignment"
        );
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            write_output(&roster, args.format, BufWriter::new(file))
        }
        None => write_output(&roster, args.format, io::stdout().lock()),
    }
}

pub fn run_dialect() -> Result<()> {
    let text = toml::to_string_pretty(&Dialect::default()).context("serialize default dialect")?;
    print!("{text}");
    Ok(())
}

fn parse_document(parser: &RosterParser, path: &Path) -> Result<Roster> {
    parser.parse_file(path).map_err(|error| {
        let hint = match error {
            IngestError::MissingGridHeader { .. } => format!(
                "{}: no assignment grid found; check that the document follows the roster \
                 template or pass a matching --dialect",
                path.display()
            ),
            _ => format!("failed to parse {}", path.display()),
        };
        anyhow::Error::new(error).context(hint)
    })
}

fn write_output<W: Write>(roster: &Roster, format: OutputFormatArg, mut writer: W) -> Result<()> {
    match format {
        OutputFormatArg::Summary => {
            writer
                .write_all(render_summary(roster).as_bytes())
                .context("write summary")?;
            writer.flush().context("flush summary")?;
        }
        OutputFormatArg::Json => write_json(roster, writer)?,
        OutputFormatArg::Csv => write_csv(roster, writer)?,
    }
    Ok(())
}
