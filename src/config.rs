//! Sign configuration: display parameters and per-row grouping.
//!
//! The JSON matches the sign's `config.json`; sections the renderer does not use
//! (`server`, `feeds`, `stations`) are ignored.
//!
//! ```json
//! {
//!   "display": { "rows": 32, "cols": 64, "brightness": 60, "gpio_slowdown": 4 },
//!   "layout": {
//!     "row1": { "label": "Uptown", "groups": [ { "label": "ACE", "lines": ["A", "C", "E"] } ] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::geometry::{Geometry, LayoutVariant, TimeLabelStyle};
use crate::snapshot::RowKey;
use crate::{Error, Result};

// ============================================================================
// DisplayConfig
// ============================================================================

/// Physical display parameters.
///
/// `gpio_slowdown` and `hardware_mapping` are passed through untouched to whatever
/// drives the matrix.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pixel rows (panel height).
    pub rows: u32,
    /// Pixel columns (panel width).
    pub cols: u32,
    /// Brightness in percent, 0..=100.
    pub brightness: u8,
    /// Matrix driver timing slowdown.
    #[serde(alias = "gpioSlowdown")]
    pub gpio_slowdown: u8,
    /// Matrix driver wiring identifier.
    #[serde(alias = "hardwareMapping")]
    pub hardware_mapping: String,
    /// Geometry preset.
    pub variant: LayoutVariant,
    /// Minute label format.
    #[serde(alias = "timeLabels")]
    pub time_labels: TimeLabelStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 64,
            brightness: 100,
            gpio_slowdown: 2,
            hardware_mapping: "regular".to_owned(),
            variant: LayoutVariant::Standard,
            time_labels: TimeLabelStyle::Compact,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// A set of routes merged under one bullet.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct GroupDefinition {
    /// Human-readable name such as `"ACE"`. The bullet shows the first member route.
    #[serde(default, alias = "label", rename = "representativeLabel")]
    pub representative_label: Option<String>,
    /// Routes merged into this group, in priority order.
    #[serde(alias = "lines", rename = "memberRoutes")]
    pub member_routes: Vec<String>,
}

impl GroupDefinition {
    /// Create a group definition.
    #[must_use]
    pub fn new<I, S>(representative_label: impl Into<String>, member_routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            representative_label: Some(representative_label.into()),
            member_routes: member_routes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Layout for one row.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RowLayout {
    /// Row caption, for logs.
    pub label: Option<String>,
    /// Merge groups. Empty means one group per route.
    pub groups: Vec<GroupDefinition>,
}

/// Per-row layouts. Rows without an entry use one group per route.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LayoutConfig {
    rows: BTreeMap<RowKey, RowLayout>,
}

impl LayoutConfig {
    /// Build a layout from explicit rows.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = (RowKey, RowLayout)>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// The layout entry for `row`, if any.
    #[must_use]
    pub fn row(&self, row: RowKey) -> Option<&RowLayout> {
        self.rows.get(&row)
    }

    /// Group definitions for `row`, or `None` when the row is ungrouped.
    #[must_use]
    pub fn groups_for(&self, row: RowKey) -> Option<&[GroupDefinition]> {
        self.row(row)
            .map(|layout| layout.groups.as_slice())
            .filter(|groups| !groups.is_empty())
    }
}

// ============================================================================
// SignConfig
// ============================================================================

/// Everything the renderer reads from `config.json`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignConfig {
    /// Display parameters.
    pub display: DisplayConfig,
    /// Per-row grouping.
    pub layout: LayoutConfig,
}

impl SignConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for undecodable JSON and [`Error::InvalidConfig`] when the
    /// values describe an unusable sign.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "SignConfig::load: {} ({}x{}, brightness {}%, mapping {}, slowdown {})",
            path.display(),
            config.display.cols,
            config.display.rows,
            config.display.brightness,
            config.display.hardware_mapping,
            config.display.gpio_slowdown
        );
        Ok(config)
    }

    /// Check display values and that the derived geometry fits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.rows == 0 || display.cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "display must have rows and cols, got {}x{}",
                display.cols, display.rows
            )));
        }
        if display.brightness > 100 {
            return Err(Error::InvalidConfig(format!(
                "brightness must be 0..=100, got {}",
                display.brightness
            )));
        }
        self.geometry().check()
    }

    /// Geometry derived from the display section.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry::for_display(&self.display)
    }
}
