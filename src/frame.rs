//! The drawing operations for one render cycle.
//!
//! A [`Frame`] is plain data: composing it touches no surface, so the same input always
//! yields the same ops in the same order. Painting a frame onto a [`Surface`] is a
//! separate step.

use embedded_graphics::geometry::Point;
use smart_leds::RGB8;

use crate::bullet::draw_bullet;
use crate::geometry::Geometry;
use crate::matrix::SignFont;
use crate::snapshot::RowKey;
use crate::surface::Surface;

/// Longest text a single op carries, in bytes.
pub const LABEL_CAPACITY: usize = 16;

/// Bounded text for minute labels, the placeholder, and diagnostics.
pub type Label = heapless::String<LABEL_CAPACITY>;

/// Copy as many whole characters of `text` as fit in `max_chars` and [`LABEL_CAPACITY`].
#[must_use]
pub fn label_from(text: &str, max_chars: usize) -> Label {
    let mut label = Label::new();
    for ch in text.chars().take(max_chars) {
        if label.push(ch).is_err() {
            break;
        }
    }
    label
}

/// One drawing operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawOp {
    /// A route bullet with its top-left corner at `top_left`.
    Bullet {
        /// Top-left corner of the bullet mask.
        top_left: Point,
        /// Route that picks the color and the letter.
        route: String,
    },
    /// Text with the left end of its baseline at `origin`.
    Text {
        /// Baseline-left position.
        origin: Point,
        /// Characters to draw.
        text: Label,
        /// Text color.
        color: RGB8,
        /// Font.
        font: SignFont,
    },
}

impl DrawOp {
    /// Left edge of the op.
    #[must_use]
    pub const fn start_x(&self) -> i32 {
        match self {
            Self::Bullet { top_left, .. } => top_left.x,
            Self::Text { origin, .. } => origin.x,
        }
    }

    /// True for [`DrawOp::Bullet`].
    #[must_use]
    pub const fn is_bullet(&self) -> bool {
        matches!(self, Self::Bullet { .. })
    }

    /// Draw this op onto `surface`.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, geometry: &Geometry) {
        match self {
            Self::Bullet { top_left, route } => {
                draw_bullet(surface, *top_left, route, geometry);
            }
            Self::Text {
                origin,
                text,
                color,
                font,
            } => surface.draw_text(text, *origin, *font, *color),
        }
    }
}

/// The ops for one row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowFrame {
    /// Which band.
    pub row: RowKey,
    /// Ops in drawing order.
    pub ops: Vec<DrawOp>,
}

/// Everything drawn in one render cycle: either all rows, or one diagnostic message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Frame {
    /// Normal frame, one entry per row in [`RowKey::ALL`] order.
    Rows(Vec<RowFrame>),
    /// Input was missing or malformed; only the diagnostic text is drawn.
    Diagnostic(DrawOp),
}

impl Frame {
    /// Every op in drawing order.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        let (rows, diagnostic) = match self {
            Self::Rows(rows) => (rows.as_slice(), None),
            Self::Diagnostic(op) => (&[][..], Some(op)),
        };
        rows.iter().flat_map(|row| row.ops.iter()).chain(diagnostic)
    }

    /// The ops for `row`; empty for a diagnostic frame.
    #[must_use]
    pub fn row_ops(&self, row: RowKey) -> &[DrawOp] {
        match self {
            Self::Rows(rows) => rows
                .iter()
                .find(|row_frame| row_frame.row == row)
                .map(|row_frame| row_frame.ops.as_slice())
                .unwrap_or_default(),
            Self::Diagnostic(_) => &[],
        }
    }

    /// True for [`Frame::Diagnostic`].
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Diagnostic(_))
    }

    /// Draw every op onto `surface`. Does not clear or commit.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, geometry: &Geometry) {
        for op in self.ops() {
            op.paint(surface, geometry);
        }
    }
}
