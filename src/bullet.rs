//! Route bullets: a filled circle in the route color with the route letter on top.

use embedded_graphics::geometry::Point;

use crate::color::{contrast_text_color, route_color};
use crate::frame::{Label, label_from};
use crate::geometry::Geometry;
use crate::surface::Surface;

/// Draw the bullet for `route` with its mask's top-left corner at `top_left`.
///
/// Returns the horizontal space the bullet reserves ([`Geometry::bullet_footprint`]);
/// callers advance their cursor by exactly this much.
pub fn draw_bullet<S: Surface + ?Sized>(
    surface: &mut S,
    top_left: Point,
    route: &str,
    geometry: &Geometry,
) -> i32 {
    let fill = route_color(route);
    for (row_offset, (start, width)) in (0_i32..).zip(geometry.bullet_mask.runs()) {
        surface.fill_run(
            Point::new(top_left.x + i32::from(*start), top_left.y + row_offset),
            u32::from(*width),
            fill,
        );
    }

    let letter = bullet_letter(route, geometry);
    if !letter.is_empty() {
        surface.draw_text(
            &letter,
            letter_origin(top_left, &letter, geometry),
            geometry.bullet_font,
            contrast_text_color(fill),
        );
    }

    geometry.bullet_footprint()
}

/// The leading characters of `route` that fit inside the mask (always at least one).
#[must_use]
pub fn bullet_letter(route: &str, geometry: &Geometry) -> Label {
    let advance = geometry.bullet_font.advance().max(1);
    let fits = (geometry.bullet_mask.width() / advance).max(1);
    label_from(route, fits as usize)
}

/// Baseline-left origin that centers `letter` in the mask.
fn letter_origin(top_left: Point, letter: &str, geometry: &Geometry) -> Point {
    let mask = geometry.bullet_mask;
    let font = geometry.bullet_font.to_font();
    let left = mask
        .width()
        .saturating_sub(geometry.bullet_font.text_width(letter))
        / 2;
    let glyph_top = mask.height().saturating_sub(font.character_size.height) / 2;
    Point::new(
        top_left.x + left as i32,
        top_left.y + (glyph_top + font.baseline) as i32,
    )
}
