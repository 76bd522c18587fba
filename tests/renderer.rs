#![allow(missing_docs)]
//! Whole-frame composition and the commit cycle.

use serde_json::json;
use subway_sign::color::{DIAGNOSTIC_COLOR, RGB8, route_color};
use subway_sign::config::{GroupDefinition, LayoutConfig, RowLayout};
use subway_sign::frame::DrawOp;
use subway_sign::geometry::Geometry;
use subway_sign::matrix::{Point, SignFont};
use subway_sign::renderer::{NO_DATA, RenderPhase, SignRenderer};
use subway_sign::snapshot::{Arrival, RowKey, Snapshot};
use subway_sign::surface::Surface;
use subway_sign::{Error, Result};

#[derive(Default)]
struct RecordingSurface {
    fills: Vec<(Point, u32, RGB8)>,
    texts: Vec<(String, Point, RGB8)>,
    clears: usize,
    commits: usize,
    fail_commit: bool,
}

impl Surface for RecordingSurface {
    fn fill_run(&mut self, start: Point, width: u32, color: RGB8) {
        self.fills.push((start, width, color));
    }

    fn draw_text(&mut self, text: &str, origin: Point, _font: SignFont, color: RGB8) {
        self.texts.push((text.to_owned(), origin, color));
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.fills.clear();
        self.texts.clear();
    }

    fn commit(&mut self) -> Result<()> {
        if self.fail_commit {
            return Err(Error::PanelUnavailable("test panel unplugged"));
        }
        self.commits += 1;
        Ok(())
    }
}

fn renderer() -> SignRenderer<RecordingSurface> {
    SignRenderer::new(
        RecordingSurface::default(),
        Geometry::MATRIX_64X32,
        LayoutConfig::default(),
    )
}

fn texts(surface: &RecordingSurface) -> Vec<&str> {
    surface.texts.iter().map(|(text, _, _)| text.as_str()).collect()
}

#[test]
fn absent_input_shows_no_data() {
    let mut renderer = renderer();
    let frame = renderer.render(None).unwrap();

    assert!(frame.is_diagnostic());
    assert!(RowKey::ALL.iter().all(|row| frame.row_ops(*row).is_empty()));
    let surface = renderer.surface();
    assert!(surface.fills.is_empty());
    assert_eq!(
        surface.texts,
        [(NO_DATA.to_owned(), Point::new(2, 17), DIAGNOSTIC_COLOR)]
    );
    assert_eq!(surface.commits, 1);
    assert_eq!(renderer.phase(), RenderPhase::Committed);
}

#[test]
fn malformed_json_shows_no_data() {
    for document in [json!(null), json!({ "arrivals": [] }), json!({ "rows": 3 })] {
        let mut renderer = renderer();
        let frame = renderer.render_json(Some(&document)).unwrap();
        assert!(frame.is_diagnostic(), "{document} should be diagnostic");
        assert_eq!(texts(renderer.surface()), [NO_DATA]);
    }
    let mut renderer = renderer();
    assert!(renderer.render_json(None).unwrap().is_diagnostic());
}

#[test]
fn diagnostic_text_is_truncated() {
    let mut renderer = renderer();
    renderer
        .render_diagnostic("FEED TIMEOUT AFTER 30S")
        .unwrap();
    assert_eq!(texts(renderer.surface()), ["FEED TIMEOUT"]);
}

#[test]
fn empty_snapshot_shows_three_placeholders_and_no_bullets() {
    let mut renderer = renderer();
    let frame = renderer.render(Some(&Snapshot::default())).unwrap();

    assert!(!frame.is_diagnostic());
    assert_eq!(frame.ops().count(), 3);
    let surface = renderer.surface();
    assert!(surface.fills.is_empty());
    assert_eq!(texts(surface), ["---", "---", "---"]);
    let baselines: Vec<i32> = surface.texts.iter().map(|(_, origin, _)| origin.y).collect();
    assert_eq!(baselines, [7, 18, 29]);
}

#[test]
fn bullets_fill_the_mask_in_route_color() {
    let mut renderer = renderer();
    let snapshot = Snapshot::from_rows([(RowKey::Row3, vec![Arrival::new("N", 4)])]);
    renderer.render(Some(&snapshot)).unwrap();

    let surface = renderer.surface();
    assert_eq!(surface.fills.len(), 9);
    assert!(surface.fills.iter().all(|(_, _, color)| *color == route_color("N")));
    assert_eq!(surface.fills[0], (Point::new(3, 22), 5, route_color("N")));
    assert_eq!(surface.fills[4], (Point::new(1, 26), 9, route_color("N")));
    let fill_area: u32 = surface.fills.iter().map(|(_, width, _)| width).sum();
    assert_eq!(fill_area, 5 + 7 + 9 * 5 + 7 + 5);

    let letter = &surface.texts[2];
    assert_eq!(letter.0, "N");
    assert_eq!(letter.1, Point::new(3, 29));
    assert_eq!(letter.2, RGB8::new(0, 0, 0));
}

#[test]
fn grouped_rows_follow_layout() {
    let layout = LayoutConfig::from_rows([(
        RowKey::Row1,
        RowLayout {
            label: Some("Uptown".to_owned()),
            groups: vec![GroupDefinition::new("ACE", ["A", "C", "E"])],
        },
    )]);
    let mut renderer = SignRenderer::new(
        RecordingSurface::default(),
        Geometry::MATRIX_64X32,
        layout,
    );
    let snapshot = Snapshot::from_rows([(
        RowKey::Row1,
        vec![Arrival::new("E", 6), Arrival::new("C", 2), Arrival::new("A", 9)],
    )]);
    let frame = renderer.render(Some(&snapshot)).unwrap();

    let row1 = frame.row_ops(RowKey::Row1);
    assert_eq!(row1.iter().filter(|op| op.is_bullet()).count(), 1);
    assert!(matches!(&row1[0], DrawOp::Bullet { route, .. } if route == "A"));
    assert_eq!(texts(renderer.surface()), ["A", "2", "6", "---", "---"]);
}

#[test]
fn composing_is_deterministic_and_stateless() {
    let mut renderer = renderer();
    let busy = Snapshot::from_rows([(RowKey::Row1, vec![Arrival::new("7", 3)])]);
    let first = renderer.render(Some(&busy)).unwrap();
    renderer.render(Some(&Snapshot::default())).unwrap();
    assert_eq!(texts(renderer.surface()), ["---", "---", "---"]);
    let again = renderer.render(Some(&busy)).unwrap();
    assert_eq!(first, again);
    assert_eq!(renderer.compose(Some(&busy)), again);
    assert_eq!(renderer.surface().clears, 3);
}

#[test]
fn failed_commit_returns_to_idle() {
    let mut renderer = renderer();
    renderer.surface_mut().fail_commit = true;
    let result = renderer.render(Some(&Snapshot::default()));
    assert!(matches!(result, Err(Error::PanelUnavailable(_))));
    assert_eq!(renderer.phase(), RenderPhase::Idle);

    renderer.surface_mut().fail_commit = false;
    renderer.render(Some(&Snapshot::default())).unwrap();
    assert_eq!(renderer.phase(), RenderPhase::Committed);
}

#[test]
fn clear_commits_an_empty_frame() {
    let mut renderer = renderer();
    assert_eq!(renderer.phase(), RenderPhase::Idle);
    renderer.render(None).unwrap();
    renderer.clear().unwrap();
    let surface = renderer.surface();
    assert!(surface.texts.is_empty());
    assert!(surface.fills.is_empty());
    assert_eq!(surface.commits, 2);
    assert_eq!(renderer.phase(), RenderPhase::Committed);
}
