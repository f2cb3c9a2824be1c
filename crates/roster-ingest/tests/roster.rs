//! End-to-end roster extraction tests.

use chrono::NaiveDate;
use roster_ingest::{
    Document, FixedClock, IngestError, Row, RosterParser, Table, parse_roster, resolve_date,
};
use roster_model::{AssignmentRow, Dialect, RoomRange};

const UNIT_ROSTER: &str = r#"
<html><body>
<table>
  <tr><td colspan="2">5 EAST MED/SURG</td></tr>
  <tr><td>Friday, April 4th, 2025</td></tr>
  <tr><td>CHARGE NURSE 7A-7P: #7501</td><td>CHARGE NURSE 7P-7A: #7610</td></tr>
  <tr><td>PCT 7A-7P:<br>Ann Lee<br>Bo Chan</td><td>PCT 7P-7A:<br>Cy Diaz</td></tr>
</table>
<table>
  <tr>
    <th>ROOM</th><th>PREC</th><th>PATIENT</th><th>MRN</th><th>STATUS</th>
    <th>RN<br>DAY</th><th>EXT DAY</th><th>RN NIGHT</th><th>EXT NIGHT</th>
  </tr>
  <tr>
    <td>501</td><td>C</td><td>A. Adams</td><td>100001</td><td>NPO</td>
    <td>#7502</td><td>4410</td><td>#7620</td><td>4420</td>
  </tr>
  <tr>
    <td>512</td><td></td><td>J. Doe</td><td>100002</td><td></td>
    <td>#7503</td><td></td><td>#7621</td><td></td>
  </tr>
  <tr><td>abc</td><td colspan="8">blank</td></tr>
</table>
<table>
  <tr>
    <td>530</td><td>ISO</td><td>Z. Last</td><td>100003</td><td></td>
    <td>#7504</td><td></td><td>#7622</td><td></td>
  </tr>
  <tr><td>FLOAT 7A-7P<br>Eve Fox<br>Gil Ho</td><td>FLOAT 7P-7A<br>Ian Jo</td></tr>
  <tr><td>RESPIRATORY<br>Kim Lu</td></tr>
</table>
</body></html>
"#;

fn fixed_parser() -> RosterParser {
    RosterParser::new(&Dialect::default())
        .unwrap()
        .with_clock(FixedClock(NaiveDate::from_ymd_opt(2030, 1, 2).unwrap()))
}

fn two_table_document() -> Document {
    Document::new(vec![
        Table::new(vec![Row::from_texts(["CHARGE NURSE: #7501", "7A-7P"])]),
        Table::new(vec![
            Row::from_texts(["ROOM", "PATIENT", "RN DAYS"]),
            Row::from_texts(["512", "J. Doe", "#7502"]),
        ]),
    ])
}

#[test]
fn two_table_scenario() {
    let roster = parse_roster(&two_table_document()).unwrap();
    let lo = RoomRange::default().start;

    assert_eq!(roster.charge_nurses.day, "#7501");
    assert_eq!(roster.assignments.len(), 32);
    assert_eq!(
        roster.assignments[(512 - lo) as usize],
        AssignmentRow {
            room: "512".to_string(),
            patient: "J. Doe".to_string(),
            rn_day: "#7502".to_string(),
            ..AssignmentRow::default()
        }
    );
    for (offset, row) in roster.assignments.iter().enumerate() {
        if offset != (512 - lo) as usize {
            assert_eq!(*row, AssignmentRow::vacant(lo + offset as u32));
        }
    }
}

#[test]
fn converted_unit_roster() {
    let roster = fixed_parser().parse_html(UNIT_ROSTER).unwrap();

    assert_eq!(roster.date, "2025-04-04");
    assert_eq!(roster.pcts_day, "Ann Lee\nBo Chan");
    assert_eq!(roster.pcts_night, "Cy Diaz");
    insta::assert_json_snapshot!(roster.charge_nurses, @r###"
    {
      "day": "#7501",
      "night": "#7610"
    }
    "###);
    insta::assert_json_snapshot!(roster.floats, @r###"
    {
      "day": [
        "Eve Fox",
        "Gil Ho"
      ],
      "night": [
        "Ian Jo"
      ]
    }
    "###);
    assert_eq!(roster.respiratory, vec!["Kim Lu"]);
    insta::assert_json_snapshot!(roster.occupied().collect::<Vec<_>>(), @r###"
    [
      {
        "room": "501",
        "precaution": "C",
        "patient": "A. Adams",
        "mrn": "100001",
        "status": "NPO",
        "rn_day": "#7502",
        "ext_day": "4410",
        "rn_night": "#7620",
        "ext_night": "4420"
      },
      {
        "room": "512",
        "precaution": "",
        "patient": "J. Doe",
        "mrn": "100002",
        "status": "",
        "rn_day": "#7503",
        "ext_day": "",
        "rn_night": "#7621",
        "ext_night": ""
      },
      {
        "room": "530",
        "precaution": "ISO",
        "patient": "Z. Last",
        "mrn": "100003",
        "status": "",
        "rn_day": "#7504",
        "ext_day": "",
        "rn_night": "#7622",
        "ext_night": ""
      }
    ]
    "###);
}

#[test]
fn parsing_is_idempotent() {
    let parser = fixed_parser();
    let document = Document::from_html(UNIT_ROSTER);
    assert_eq!(parser.parse(&document).unwrap(), parser.parse(&document).unwrap());
}

#[test]
fn duplicate_rooms_keep_the_later_row() {
    let mut document = two_table_document();
    document.tables[1].rows.extend([
        Row::from_texts(["505", "First", ""]),
        Row::from_texts(["505", "Second", "#9"]),
    ]);
    let roster = parse_roster(&document).unwrap();
    let row = roster.assignment("505").unwrap();
    assert_eq!(row.patient, "Second");
    assert_eq!(row.rn_day, "#9");
    assert_eq!(roster.assignment("512").unwrap().patient, "J. Doe");
}

#[test]
fn garbage_rooms_never_populate_slots() {
    let mut document = two_table_document();
    document.tables[1].rows = vec![
        Row::from_texts(["ROOM", "PATIENT"]),
        Row::from_texts(["999", "Out of range"]),
        Row::from_texts(["abc", "Garbage"]),
        Row::from_texts(["", "Blank"]),
    ];
    let roster = parse_roster(&document).unwrap();
    assert_eq!(roster.occupied().count(), 0);
    assert_eq!(roster.assignments.len(), 32);
}

#[test]
fn missing_grid_header_is_fatal() {
    let document = Document::from_html(
        "<table><tr><td>Charge Nurse Day: #1</td></tr></table>\
         <table><tr><td>Room</td><td>Nurse</td></tr><tr><td>512</td><td>#2</td></tr></table>",
    );
    let err = fixed_parser().parse(&document).unwrap_err();
    assert!(matches!(err, IngestError::MissingGridHeader { rows_scanned: 2, .. }));
    assert!(err.to_string().contains("closest was row 1"));
}

#[test]
fn date_falls_back_to_clock() {
    let mut document = two_table_document();
    document.tables[0].rows.push(Row::from_texts(["Unit 5 East"]));
    let roster = fixed_parser().parse(&document).unwrap();
    assert_eq!(roster.date, "2030-01-02");
}

#[test]
fn date_in_heading_outside_tables() {
    let roster = fixed_parser()
        .parse_html(
            "<h1>5 EAST - Friday, April 4th, 2025</h1>\
             <table><tr><td>CHARGE NURSE 7A-7P</td><td>#7501</td></tr></table>\
             <table><tr><th>Room</th><th>Patient</th></tr><tr><td>512</td><td>J. Doe</td></tr></table>",
        )
        .unwrap();
    assert_eq!(roster.date, "2025-04-04");
    assert_eq!(roster.charge_nurses.day, "#7501");
    assert_eq!(roster.assignment("512").unwrap().patient, "J. Doe");
}

#[test]
fn date_resolution_examples() {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2030, 1, 2).unwrap());
    assert_eq!(resolve_date("Friday, April 4th, 2025", &clock), "2025-04-04");
    assert_eq!(resolve_date("Fri., Apr. 4, 2025", &clock), "2025-04-04");
    assert_eq!(resolve_date("census 2025-04-04", &clock), "2025-04-04");
    assert_eq!(resolve_date("printed 4/4/25", &clock), "2025-04-04");
    assert_eq!(resolve_date("no date here", &clock), "2030-01-02");
    assert_eq!(resolve_date("2025-02-30", &clock), "2030-01-02");
}

#[test]
fn custom_dialect_changes_recognition() {
    let mut dialect = Dialect::default().with_rooms(RoomRange::new(101, 110).unwrap());
    dialect.markers.charge = vec!["lead nurse".to_string()];
    dialect.markers.patient = vec!["resident".to_string()];
    dialect.columns.patient = vec!["resident".to_string()];
    let parser = RosterParser::new(&dialect).unwrap();

    let document = Document::new(vec![
        Table::new(vec![Row::from_texts(["LEAD NURSE (DAY): Pat"])]),
        Table::new(vec![
            Row::from_texts(["Room", "Resident"]),
            Row::from_texts(["104", "M. Ray"]),
            Row::from_texts(["512", "J. Doe"]),
        ]),
    ]);
    let roster = parser.parse(&document).unwrap();
    assert_eq!(roster.charge_nurses.day, "Pat");
    assert_eq!(roster.assignments.len(), 10);
    assert_eq!(roster.assignment("104").unwrap().patient, "M. Ray");
    assert!(roster.assignment("512").is_none());
}
