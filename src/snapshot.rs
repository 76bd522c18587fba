//! Arrival snapshots: the row-keyed input handed to the renderer once per cycle.
//!
//! The wire shape is the one the arrivals API serves:
//!
//! ```json
//! { "rows": { "row1": { "arrivals": [ { "route": "A", "minutesUntil": 3 } ] } } }
//! ```
//!
//! Anything else in the document (timestamps, station names, labels) is ignored.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// RowKey
// ============================================================================

/// One of the three horizontal bands of the sign, top to bottom.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum RowKey {
    /// Top band.
    #[serde(rename = "row1")]
    Row1,
    /// Middle band.
    #[serde(rename = "row2")]
    Row2,
    /// Bottom band.
    #[serde(rename = "row3")]
    Row3,
}

impl RowKey {
    /// Every row, in drawing order.
    pub const ALL: [Self; 3] = [Self::Row1, Self::Row2, Self::Row3];

    /// Key used in JSON documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Row1 => "row1",
            Self::Row2 => "row2",
            Self::Row3 => "row3",
        }
    }

    /// Zero-based band index, top to bottom.
    #[must_use]
    pub const fn band_index(self) -> u32 {
        match self {
            Self::Row1 => 0,
            Self::Row2 => 1,
            Self::Row3 => 2,
        }
    }

    /// Parse a JSON row key such as `"row2"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|row| row.name() == name)
    }
}

// ============================================================================
// Arrival
// ============================================================================

/// One predicted arrival.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Arrival {
    /// Route identifier, e.g. `"A"` or `"7"`.
    pub route: String,
    /// Minutes until arrival. May be zero or negative for a train in the station.
    #[serde(rename = "minutesUntil")]
    pub minutes_until: i32,
}

impl Arrival {
    /// Create an arrival.
    #[must_use]
    pub fn new(route: impl Into<String>, minutes_until: i32) -> Self {
        Self {
            route: route.into(),
            minutes_until,
        }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Arrivals for every row, fully materialized before a render cycle begins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Snapshot {
    rows: BTreeMap<RowKey, Vec<Arrival>>,
}

impl Snapshot {
    /// Build a snapshot directly from per-row arrivals.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = (RowKey, Vec<Arrival>)>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Interpret a decoded JSON document.
    ///
    /// Returns `None` when the document lacks the row-keyed structure (not an object, or no
    /// `rows` object). Inside a well-formed document, a row that is not an object or has no
    /// `arrivals` array counts as empty, and individual records that fail to decode are
    /// skipped.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let rows_value = value.as_object()?.get("rows")?.as_object()?;
        let mut rows = BTreeMap::new();
        for (name, row_value) in rows_value {
            let Some(row) = RowKey::from_name(name) else {
                continue;
            };
            rows.insert(row, arrivals_from_row_value(row, row_value));
        }
        Some(Self { rows })
    }

    /// Decode and interpret a JSON string. Invalid JSON counts as absent input.
    #[must_use]
    pub fn from_json_str(json: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_value(&value),
            Err(err) => {
                warn!("Snapshot::from_json_str: undecodable input: {}", err);
                None
            }
        }
    }

    /// Arrivals for `row`, empty when the row is absent.
    #[must_use]
    pub fn arrivals(&self, row: RowKey) -> &[Arrival] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or_default()
    }
}

fn arrivals_from_row_value(row: RowKey, row_value: &Value) -> Vec<Arrival> {
    let Some(records) = row_value.get("arrivals").and_then(Value::as_array) else {
        return Vec::new();
    };
    records
        .iter()
        .filter_map(|record| match Arrival::deserialize(record) {
            Ok(arrival) => Some(arrival),
            Err(err) => {
                warn!(
                    "Snapshot: skipping malformed arrival in {}: {}",
                    row.name(),
                    err
                );
                None
            }
        })
        .collect()
}
