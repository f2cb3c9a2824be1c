//! Roster output writers: JSON document and per-room CSV.

use std::io::Write;

use anyhow::{Context, Result};
use roster_model::{GridField, Roster};

/// Writes the whole roster as pretty-printed JSON.
pub fn write_json<W: Write>(roster: &Roster, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, roster).context("serialize roster as JSON")?;
    writeln!(writer).context("write JSON output")?;
    Ok(())
}

/// Writes one record per room with the nine grid columns, vacant rooms
/// included, so the row count always equals the room range size.
pub fn write_csv<W: Write>(roster: &Roster, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(GridField::ALL.iter().map(GridField::key))
        .context("write CSV header")?;
    for row in &roster.assignments {
        csv.write_record(GridField::ALL.iter().map(|field| row.get(*field)))
            .with_context(|| format!("write CSV record for room {}", row.room))?;
    }
    csv.flush().context("flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use roster_model::RoomRange;

    use super::*;

    fn roster() -> Roster {
        let mut roster = Roster::empty("2025-04-04", RoomRange::new(501, 502).unwrap());
        roster.assignments[1].patient = "Doe, J.".to_string();
        roster.assignments[1].rn_day = "#7502".to_string();
        roster
    }

    #[test]
    fn test_csv_has_one_record_per_room() {
        let mut out = Vec::new();
        write_csv(&roster(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "room,precaution,patient,mrn,status,rn_day,ext_day,rn_night,ext_night\n\
             501,,,,,,,,\n\
             502,,\"Doe, J.\",,,#7502,,,\n"
        );
    }

    #[test]
    fn test_json_round_trips() {
        let mut out = Vec::new();
        write_json(&roster(), &mut out).unwrap();
        let parsed: Roster = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, roster());
    }
}
