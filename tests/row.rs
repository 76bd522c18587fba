#![allow(missing_docs)]
//! Laying out one row: placeholder, minute labels, and overflow.

use subway_sign::color::{PLACEHOLDER_COLOR, TIME_TEXT_COLOR};
use subway_sign::config::LayoutConfig;
use subway_sign::frame::DrawOp;
use subway_sign::geometry::{Geometry, TimeLabelStyle};
use subway_sign::groups::DisplayGroup;
use subway_sign::matrix::Point;
use subway_sign::row::{compose_row, format_minutes, layout_groups};
use subway_sign::snapshot::{Arrival, RowKey};

const GEOMETRY: Geometry = Geometry::MATRIX_64X32;

fn bullet_xs(ops: &[DrawOp]) -> Vec<i32> {
    ops.iter().filter(|op| op.is_bullet()).map(DrawOp::start_x).collect()
}

fn label_xs(ops: &[DrawOp]) -> Vec<i32> {
    ops.iter().filter(|op| !op.is_bullet()).map(DrawOp::start_x).collect()
}

fn texts(ops: &[DrawOp]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Bullet { .. } => None,
        })
        .collect()
}

fn groups(times: &[&[i32]]) -> Vec<DisplayGroup> {
    let routes = ["A", "B", "C", "D", "E", "F"];
    routes
        .iter()
        .zip(times)
        .map(|(route, times)| DisplayGroup::new(*route, times.to_vec()))
        .collect()
}

#[test]
fn empty_row_draws_only_placeholder() {
    let ops = compose_row(RowKey::Row2, &[], &LayoutConfig::default(), &GEOMETRY);
    assert_eq!(ops.len(), 1);
    let DrawOp::Text { origin, text, color, .. } = &ops[0] else {
        panic!("placeholder must be text, got {ops:?}");
    };
    assert_eq!(text.as_str(), "---");
    assert_eq!(*color, PLACEHOLDER_COLOR);
    assert_eq!(*origin, Point::new(1, 18));
}

#[test]
fn rows_sit_in_three_bands() {
    assert_eq!(GEOMETRY.band_height(), 10);
    assert_eq!(GEOMETRY.row_top(RowKey::Row1), 0);
    assert_eq!(GEOMETRY.row_top(RowKey::Row2), 11);
    assert_eq!(GEOMETRY.row_top(RowKey::Row3), 22);
}

#[test]
fn single_group_positions() {
    let arrivals = [Arrival::new("A", 3), Arrival::new("C", 5), Arrival::new("A", 1)];
    let ops = compose_row(RowKey::Row1, &arrivals, &LayoutConfig::default(), &GEOMETRY);

    assert_eq!(
        ops[0],
        DrawOp::Bullet {
            top_left: Point::new(1, 0),
            route: "A".to_owned()
        }
    );
    assert_eq!(bullet_xs(&ops), [1, 28]);
    assert_eq!(label_xs(&ops), [11, 19, 38]);
    assert_eq!(texts(&ops), ["1", "3", "5"]);
    assert!(ops.iter().all(|op| match op {
        DrawOp::Text { origin, color, .. } => origin.y == 7 && *color == TIME_TEXT_COLOR,
        DrawOp::Bullet { top_left, .. } => top_left.y == 0,
    }));
}

#[test]
fn one_time_groups_fit_three() {
    let ops = layout_groups(RowKey::Row1, &groups(&[&[3], &[4], &[5], &[6]]), &GEOMETRY);
    assert_eq!(bullet_xs(&ops), [1, 20, 39]);
    assert_eq!(label_xs(&ops), [11, 30, 49]);
}

#[test]
fn two_time_groups_fit_two() {
    let ops = layout_groups(
        RowKey::Row3,
        &groups(&[&[1, 2], &[3, 4], &[5, 6]]),
        &GEOMETRY,
    );
    assert_eq!(bullet_xs(&ops), [1, 28]);
    assert_eq!(label_xs(&ops), [11, 19, 38, 46]);
}

#[test]
fn overflow_cuts_inside_a_group() {
    let ops = layout_groups(RowKey::Row1, &groups(&[&[12, 14], &[15, 18]]), &GEOMETRY);
    assert_eq!(bullet_xs(&ops), [1, 38]);
    assert_eq!(label_xs(&ops), [11, 24, 48]);
    assert_eq!(texts(&ops), ["12", "14", "15"]);
}

#[test]
fn no_op_starts_past_threshold() {
    let many = [&[1, 22][..]; 6];
    let ops = layout_groups(RowKey::Row2, &groups(&many), &GEOMETRY);
    assert!(ops.iter().all(|op| op.start_x() <= GEOMETRY.overflow_threshold));
}

#[test]
fn due_trains_read_now() {
    let arrivals = [Arrival::new("L", 0), Arrival::new("L", -1)];
    let ops = compose_row(RowKey::Row1, &arrivals, &LayoutConfig::default(), &GEOMETRY);
    assert_eq!(texts(&ops), ["Now", "Now"]);
    assert_eq!(label_xs(&ops), [11, 29]);
}

#[test]
fn minute_label_styles() {
    assert_eq!(format_minutes(7, TimeLabelStyle::Compact).as_str(), "7");
    assert_eq!(format_minutes(7, TimeLabelStyle::Suffixed).as_str(), "7m");
    assert_eq!(format_minutes(1, TimeLabelStyle::Compact).as_str(), "1");
    assert_eq!(format_minutes(0, TimeLabelStyle::Suffixed).as_str(), "Now");
}

#[test]
fn suffixed_labels_advance_further() {
    let geometry = Geometry {
        time_labels: TimeLabelStyle::Suffixed,
        ..GEOMETRY
    };
    let ops = layout_groups(RowKey::Row1, &groups(&[&[5, 9]]), &geometry);
    assert_eq!(texts(&ops), ["5m", "9m"]);
    assert_eq!(label_xs(&ops), [11, 24]);
}

#[test]
fn dense_geometry_fits_more_groups() {
    let dense = Geometry::MATRIX_64X32_DENSE;
    let ops = layout_groups(RowKey::Row1, &groups(&[&[1, 2], &[3, 4], &[5, 6]]), &dense);
    assert_eq!(bullet_xs(&ops), [1, 22, 43]);
    assert_eq!(label_xs(&ops), [9, 15, 30, 36]);
}
