//! Lay one row out left to right.
//!
//! The cursor starts at the left margin. Each group draws its bullet and up to two
//! minute labels, then adds a small gap. Before every op the cursor is checked against
//! the overflow threshold; once past it, the rest of the row is dropped rather than
//! wrapped or squeezed.

use embedded_graphics::geometry::Point;
use log::debug;

use crate::color::{PLACEHOLDER_COLOR, TIME_TEXT_COLOR};
use crate::config::LayoutConfig;
use crate::frame::{DrawOp, LABEL_CAPACITY, Label, label_from};
use crate::geometry::{Geometry, TimeLabelStyle};
use crate::groups::{DisplayGroup, build_row_groups};
use crate::snapshot::{Arrival, RowKey};

/// Text drawn on a row with no arrivals.
pub const PLACEHOLDER: &str = "---";

/// Text for a train that is due.
pub const DUE_LABEL: &str = "Now";

/// Format a minute count: `Now` below one minute, otherwise the number in `style`.
#[must_use]
pub fn format_minutes(minutes: i32, style: TimeLabelStyle) -> Label {
    if minutes < 1 {
        return label_from(DUE_LABEL, DUE_LABEL.len());
    }
    let text = match style {
        TimeLabelStyle::Compact => format!("{minutes}"),
        TimeLabelStyle::Suffixed => format!("{minutes}m"),
    };
    label_from(&text, LABEL_CAPACITY)
}

/// All ops for `row`.
///
/// An empty `arrivals` gives the placeholder alone; grouping is not consulted.
#[must_use]
pub fn compose_row(
    row: RowKey,
    arrivals: &[Arrival],
    layout: &LayoutConfig,
    geometry: &Geometry,
) -> Vec<DrawOp> {
    if arrivals.is_empty() {
        return vec![placeholder_op(row, geometry)];
    }
    let groups = build_row_groups(row, arrivals, layout);
    layout_groups(row, &groups, geometry)
}

/// Position `groups` along `row`, stopping at the overflow threshold.
#[must_use]
pub fn layout_groups(row: RowKey, groups: &[DisplayGroup], geometry: &Geometry) -> Vec<DrawOp> {
    let top = geometry.row_top(row);
    let baseline = geometry.text_baseline(row);
    let mut x = geometry.left_margin;
    let mut ops = Vec::new();
    let mut drawn_groups = 0_usize;

    'groups: for group in groups {
        if x > geometry.overflow_threshold {
            break;
        }
        ops.push(DrawOp::Bullet {
            top_left: Point::new(x, top),
            route: group.label.clone(),
        });
        drawn_groups += 1;
        x += geometry.bullet_footprint();

        for &minutes in group.visible_times() {
            if x > geometry.overflow_threshold {
                break 'groups;
            }
            let text = format_minutes(minutes, geometry.time_labels);
            let advance = geometry.label_advance(&text);
            ops.push(DrawOp::Text {
                origin: Point::new(x, baseline),
                text,
                color: TIME_TEXT_COLOR,
                font: geometry.label_font,
            });
            x += advance;
        }
        x += geometry.group_gap;
    }

    if drawn_groups < groups.len() {
        debug!(
            "layout_groups: {} overflow, drew {} of {} groups",
            row.name(),
            drawn_groups,
            groups.len()
        );
    }
    ops
}

/// The `---` op for an empty row.
#[must_use]
pub fn placeholder_op(row: RowKey, geometry: &Geometry) -> DrawOp {
    DrawOp::Text {
        origin: Point::new(geometry.left_margin, geometry.text_baseline(row)),
        text: label_from(PLACEHOLDER, PLACEHOLDER.len()),
        color: PLACEHOLDER_COLOR,
        font: geometry.label_font,
    }
}
