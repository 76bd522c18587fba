#![allow(missing_docs)]
//! Interpreting arrival snapshot documents.

use serde_json::json;
use subway_sign::snapshot::{Arrival, RowKey, Snapshot};

#[test]
fn well_formed_document_decodes_every_row() {
    let snapshot = Snapshot::from_value(&json!({
        "timestamp": "2026-10-19T08:00:00Z",
        "rows": {
            "row1": { "label": "Uptown", "arrivals": [
                { "route": "A", "minutesUntil": 3 },
                { "route": "C", "minutesUntil": 0 }
            ] },
            "row3": { "arrivals": [ { "route": "7", "minutesUntil": 12 } ] }
        }
    }))
    .unwrap();

    assert_eq!(
        snapshot.arrivals(RowKey::Row1),
        [Arrival::new("A", 3), Arrival::new("C", 0)]
    );
    assert!(snapshot.arrivals(RowKey::Row2).is_empty());
    assert_eq!(snapshot.arrivals(RowKey::Row3), [Arrival::new("7", 12)]);
}

#[test]
fn missing_rows_structure_is_absent_input() {
    assert!(Snapshot::from_value(&json!(null)).is_none());
    assert!(Snapshot::from_value(&json!([1, 2, 3])).is_none());
    assert!(Snapshot::from_value(&json!({ "arrivals": [] })).is_none());
    assert!(Snapshot::from_value(&json!({ "rows": [] })).is_none());
}

#[test]
fn undecodable_json_is_absent_input() {
    assert!(Snapshot::from_json_str("{\"rows\": ").is_none());
    assert!(Snapshot::from_json_str("").is_none());
}

#[test]
fn malformed_records_are_skipped() {
    let snapshot = Snapshot::from_value(&json!({
        "rows": { "row2": { "arrivals": [
            { "route": "F", "minutesUntil": 4 },
            { "route": 5, "minutesUntil": 1 },
            { "route": "M" },
            "G",
            { "route": "G", "minutesUntil": 9 }
        ] } }
    }))
    .unwrap();

    assert_eq!(
        snapshot.arrivals(RowKey::Row2),
        [Arrival::new("F", 4), Arrival::new("G", 9)]
    );
}

#[test]
fn unknown_and_malformed_rows_are_empty() {
    let snapshot = Snapshot::from_value(&json!({
        "rows": {
            "row1": "closed",
            "row2": { "label": "no arrivals key" },
            "row4": { "arrivals": [ { "route": "A", "minutesUntil": 1 } ] }
        }
    }))
    .unwrap();

    for row in RowKey::ALL {
        assert!(snapshot.arrivals(row).is_empty(), "{} should be empty", row.name());
    }
}

#[test]
fn row_keys_round_trip_through_names() {
    for row in RowKey::ALL {
        assert_eq!(RowKey::from_name(row.name()), Some(row));
    }
    assert_eq!(RowKey::from_name("Row1"), None);
}
