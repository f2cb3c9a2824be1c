//! Serialization and configuration tests for the roster model.

use roster_model::{
    AssignmentRow, ChargeNurses, Dialect, FloatStaff, GridField, RoomRange, Roster, Shift,
};

fn sample_roster() -> Roster {
    let mut roster = Roster::empty("2025-04-04", RoomRange::new(501, 503).unwrap());
    roster.charge_nurses = ChargeNurses {
        day: "#7501".to_string(),
        night: String::new(),
    };
    roster.floats = FloatStaff {
        day: vec!["A. Smith".to_string()],
        night: vec![],
    };
    roster.assignments[1].patient = "J. Doe".to_string();
    roster
}

#[test]
fn roster_serializes_round_trip() {
    let roster = sample_roster();
    let json = serde_json::to_string(&roster).expect("serialize roster");
    let round: Roster = serde_json::from_str(&json).expect("deserialize roster");
    assert_eq!(round, roster);
}

#[test]
fn roster_json_uses_snake_case_fields() {
    let json = serde_json::to_value(sample_roster()).expect("serialize roster");
    assert_eq!(json["charge_nurses"]["day"], "#7501");
    assert_eq!(json["assignments"][1]["room"], "502");
    assert_eq!(json["assignments"][1]["rn_day"], "");
    assert!(json["respiratory"].as_array().unwrap().is_empty());
}

#[test]
fn shift_accessors_agree_with_fields() {
    let roster = sample_roster();
    assert_eq!(roster.charge_nurses.get(Shift::Day), "#7501");
    assert_eq!(roster.charge_nurses.get(Shift::Night), "");
    assert_eq!(roster.floats.get(Shift::Day), ["A. Smith".to_string()]);
    assert_eq!(roster.pcts(Shift::Night), "");
}

#[test]
fn occupied_counts_only_filled_rows() {
    let roster = sample_roster();
    let occupied: Vec<&AssignmentRow> = roster.occupied().collect();
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0].get(GridField::Patient), "J. Doe");
}

#[test]
fn partial_dialect_file_keeps_defaults() {
    let dialect: Dialect = toml::from_str(
        r#"
        [rooms]
        start = 401
        end = 416

        [markers]
        charge = ["lead rn"]
        "#,
    )
    .expect("parse dialect");
    assert_eq!(dialect.rooms.len(), 16);
    assert_eq!(dialect.markers.charge, vec!["lead rn".to_string()]);
    assert_eq!(dialect.markers.room, vec!["room".to_string()]);
    assert_eq!(dialect.columns, Dialect::default().columns);
    assert_eq!(dialect.patterns, Dialect::default().patterns);
}

#[test]
fn default_dialect_survives_toml_round_trip() {
    let dialect = Dialect::default();
    let text = toml::to_string_pretty(&dialect).expect("serialize dialect");
    let round: Dialect = toml::from_str(&text).expect("parse dialect");
    assert_eq!(round, dialect);
}
