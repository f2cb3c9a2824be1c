//! Export tests over parsed documents.

use std::fs;
use std::io::BufWriter;

use roster_cli::export::{write_csv, write_json};
use roster_ingest::RosterParser;
use roster_model::{Dialect, RoomRange};

const SHEET: &str = "\
<table><tr><td>Charge Nurse 7A-7P: #7501</td></tr></table>\
<table>\
<tr><th>Room</th><th>Patient</th><th>RN Day</th><th>RN Night</th></tr>\
<tr><td>102</td><td>J. Doe</td><td>#7502</td><td>#7610</td></tr>\
</table>";

fn parser() -> RosterParser {
    let dialect = Dialect::default().with_rooms(RoomRange::new(101, 103).unwrap());
    RosterParser::new(&dialect).unwrap()
}

#[test]
fn csv_export_covers_every_room() {
    let roster = parser().parse_html(SHEET).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    write_csv(&roster, BufWriter::new(fs::File::create(&path).unwrap())).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(text.trim_end(), @r"
    room,precaution,patient,mrn,status,rn_day,ext_day,rn_night,ext_night
    101,,,,,,,,
    102,,J. Doe,,,#7502,,#7610,
    103,,,,,,,,
    ");
}

#[test]
fn json_export_keeps_lead_nurses() {
    let roster = parser().parse_html(SHEET).unwrap();
    let mut out = Vec::new();
    write_json(&roster, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["charge_nurses"]["day"], "#7501");
    assert_eq!(value["assignments"].as_array().unwrap().len(), 3);
    assert_eq!(value["assignments"][1]["rn_night"], "#7610");
}
