//! Named layout parameters for the sign.
//!
//! Every pixel constant the renderer uses lives in [`Geometry`]: bullet mask, fonts,
//! margins, gaps, overflow threshold, and the three row bands. Two presets cover the
//! standard 9-pixel bullets and a denser 7-pixel variant.

use embedded_graphics::geometry::Point;
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::matrix::SignFont;
use crate::snapshot::RowKey;
use crate::{Error, Result};

/// Number of horizontal bands on the sign.
pub const ROW_COUNT: u32 = 3;

/// Pixels kept free to the right of the overflow threshold.
pub const OVERFLOW_MARGIN: i32 = 14;

// ============================================================================
// BulletMask
// ============================================================================

/// A filled circle described as one `(start, width)` run per pixel row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BulletMask {
    runs: &'static [(u8, u8)],
}

impl BulletMask {
    /// 9×9 circle.
    ///
    /// ```text
    /// ..XXXXX..
    /// .XXXXXXX.
    /// XXXXXXXXX  (rows 2-6)
    /// .XXXXXXX.
    /// ..XXXXX..
    /// ```
    pub const CIRCLE_9X9: Self = Self {
        runs: &[
            (2, 5),
            (1, 7),
            (0, 9),
            (0, 9),
            (0, 9),
            (0, 9),
            (0, 9),
            (1, 7),
            (2, 5),
        ],
    };

    /// 7×7 circle.
    pub const CIRCLE_7X7: Self = Self {
        runs: &[(2, 3), (1, 5), (0, 7), (0, 7), (0, 7), (1, 5), (2, 3)],
    };

    /// Row runs, top to bottom.
    #[must_use]
    pub const fn runs(&self) -> &'static [(u8, u8)] {
        self.runs
    }

    /// Widest run, in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.runs
            .iter()
            .map(|(start, width)| u32::from(*start) + u32::from(*width))
            .max()
            .unwrap_or(0)
    }

    /// Number of pixel rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.runs.len() as u32
    }
}

// ============================================================================
// Styles
// ============================================================================

/// How a minute count is written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLabelStyle {
    /// Bare number: `7`. Used when several groups share a row.
    #[default]
    Compact,
    /// Number with a minute suffix: `7m`.
    Suffixed,
}

/// Which preset a display uses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// 9×9 bullets, 5×8 labels.
    #[default]
    Standard,
    /// 7×7 bullets, 4×6 labels.
    Dense,
}

// ============================================================================
// Geometry
// ============================================================================

/// Pixel layout of the sign.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    /// Blank pixel rows between bands.
    pub row_gap: u32,
    /// Cursor start within a row.
    pub left_margin: i32,
    /// No op may start right of this x.
    pub overflow_threshold: i32,
    /// Baseline of row text, measured from the band top.
    pub text_baseline_offset: i32,
    /// Bullet shape.
    pub bullet_mask: BulletMask,
    /// Space after a bullet.
    pub bullet_gap: u32,
    /// Font for the letter inside a bullet.
    pub bullet_font: SignFont,
    /// Font for minute labels, the placeholder, and diagnostics.
    pub label_font: SignFont,
    /// Space after each minute label.
    pub label_gap: i32,
    /// Extra space after a group's last label.
    pub group_gap: i32,
    /// Minute label format.
    pub time_labels: TimeLabelStyle,
    /// Baseline-left origin of diagnostic text.
    pub diagnostic_origin: Point,
    /// Diagnostic text is cut to this many characters.
    pub diagnostic_max_chars: usize,
}

impl Geometry {
    /// Reference 64×32 sign with 9×9 bullets.
    pub const MATRIX_64X32: Self = Self {
        width: 64,
        height: 32,
        row_gap: 1,
        left_margin: 1,
        overflow_threshold: 64 - OVERFLOW_MARGIN,
        text_baseline_offset: 7,
        bullet_mask: BulletMask::CIRCLE_9X9,
        bullet_gap: 1,
        bullet_font: SignFont::Font5x7,
        label_font: SignFont::Font5x8,
        label_gap: 3,
        group_gap: 1,
        time_labels: TimeLabelStyle::Compact,
        diagnostic_origin: Point::new(2, 17),
        diagnostic_max_chars: 12,
    };

    /// 64×32 sign with 7×7 bullets and 4×6 labels; fits more groups per row.
    pub const MATRIX_64X32_DENSE: Self = Self {
        text_baseline_offset: 5,
        bullet_mask: BulletMask::CIRCLE_7X7,
        bullet_font: SignFont::Font4x6,
        label_font: SignFont::Font4x6,
        label_gap: 2,
        ..Self::MATRIX_64X32
    };

    /// The preset for `variant`.
    #[must_use]
    pub const fn preset(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Standard => Self::MATRIX_64X32,
            LayoutVariant::Dense => Self::MATRIX_64X32_DENSE,
        }
    }

    /// Geometry for a configured display: its preset resized to the configured panel.
    #[must_use]
    pub fn for_display(display: &DisplayConfig) -> Self {
        let width = display.cols;
        Self {
            width,
            height: display.rows,
            overflow_threshold: i32::try_from(width)
                .unwrap_or(i32::MAX)
                .saturating_sub(OVERFLOW_MARGIN),
            time_labels: display.time_labels,
            ..Self::preset(display.variant)
        }
    }

    /// Height of one band.
    #[must_use]
    pub const fn band_height(&self) -> u32 {
        self.height.saturating_sub(self.row_gap * (ROW_COUNT - 1)) / ROW_COUNT
    }

    /// Top pixel row of `row`'s band.
    #[must_use]
    pub const fn row_top(&self, row: RowKey) -> i32 {
        (row.band_index() * (self.band_height() + self.row_gap)) as i32
    }

    /// Baseline y for text in `row`.
    #[must_use]
    pub const fn text_baseline(&self, row: RowKey) -> i32 {
        self.row_top(row) + self.text_baseline_offset
    }

    /// Horizontal space a bullet reserves: mask width plus the gap after it.
    #[must_use]
    pub fn bullet_footprint(&self) -> i32 {
        (self.bullet_mask.width() + self.bullet_gap) as i32
    }

    /// Cursor advance after drawing `label`.
    #[must_use]
    pub fn label_advance(&self, label: &str) -> i32 {
        self.label_font.text_width(label) as i32 + self.label_gap
    }

    /// Check that bullets and labels fit inside a band and the threshold is on the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn check(&self) -> Result<()> {
        let band_height = self.band_height();
        if band_height < self.bullet_mask.height() {
            return Err(Error::InvalidConfig(format!(
                "{}-pixel rows cannot hold {}-pixel bullets",
                band_height,
                self.bullet_mask.height()
            )));
        }
        let label_height = self.label_font.to_font().character_size.height;
        if band_height < label_height {
            return Err(Error::InvalidConfig(format!(
                "{band_height}-pixel rows cannot hold {label_height}-pixel labels"
            )));
        }
        if self.overflow_threshold < self.left_margin {
            return Err(Error::InvalidConfig(format!(
                "{}-pixel display is too narrow for one group",
                self.width
            )));
        }
        Ok(())
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::MATRIX_64X32
    }
}
