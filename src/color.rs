//! Route colors and the contrast rule for text drawn on top of them.
//!
//! Colors are [`RGB8`] from the `smart_leds` crate, the same pixel type the matrix
//! buffer stores.

pub use smart_leds::RGB8;
use smart_leds::colors;

// ============================================================================
// Palette
// ============================================================================

const EIGHTH_AVE_BLUE: RGB8 = RGB8::new(0, 57, 166);
const SIXTH_AVE_ORANGE: RGB8 = RGB8::new(255, 99, 25);
const SEVENTH_AVE_RED: RGB8 = RGB8::new(238, 53, 46);
const LEXINGTON_AVE_GREEN: RGB8 = RGB8::new(0, 147, 60);
const FLUSHING_PURPLE: RGB8 = RGB8::new(185, 51, 173);
const CROSSTOWN_LIME: RGB8 = RGB8::new(108, 190, 69);
const NASSAU_BROWN: RGB8 = RGB8::new(153, 102, 51);
const CANARSIE_GRAY: RGB8 = RGB8::new(167, 169, 172);
const BROADWAY_YELLOW: RGB8 = RGB8::new(252, 204, 10);
const SHUTTLE_GRAY: RGB8 = RGB8::new(128, 128, 128);

/// Official line colors keyed by route identifier.
pub const ROUTE_COLORS: [(&str, RGB8); 23] = [
    ("A", EIGHTH_AVE_BLUE),
    ("C", EIGHTH_AVE_BLUE),
    ("E", EIGHTH_AVE_BLUE),
    ("B", SIXTH_AVE_ORANGE),
    ("D", SIXTH_AVE_ORANGE),
    ("F", SIXTH_AVE_ORANGE),
    ("M", SIXTH_AVE_ORANGE),
    ("1", SEVENTH_AVE_RED),
    ("2", SEVENTH_AVE_RED),
    ("3", SEVENTH_AVE_RED),
    ("4", LEXINGTON_AVE_GREEN),
    ("5", LEXINGTON_AVE_GREEN),
    ("6", LEXINGTON_AVE_GREEN),
    ("7", FLUSHING_PURPLE),
    ("G", CROSSTOWN_LIME),
    ("J", NASSAU_BROWN),
    ("Z", NASSAU_BROWN),
    ("L", CANARSIE_GRAY),
    ("N", BROADWAY_YELLOW),
    ("Q", BROADWAY_YELLOW),
    ("R", BROADWAY_YELLOW),
    ("W", BROADWAY_YELLOW),
    ("S", SHUTTLE_GRAY),
];

/// Bullet color for routes missing from [`ROUTE_COLORS`].
pub const FALLBACK_ROUTE_COLOR: RGB8 = colors::WHITE;

/// Arrival minute labels.
pub const TIME_TEXT_COLOR: RGB8 = RGB8::new(200, 200, 200);

/// The `---` shown on a row with no arrivals.
pub const PLACEHOLDER_COLOR: RGB8 = RGB8::new(100, 100, 100);

/// Diagnostic text such as `NO DATA`.
pub const DIAGNOSTIC_COLOR: RGB8 = RGB8::new(255, 0, 0);

/// Channel sums above this get black text; at or below it, white text.
pub const BRIGHTNESS_THRESHOLD: u16 = 400;

// ============================================================================
// Lookups
// ============================================================================

/// Look up the bullet color for a route.
///
/// Total: unknown routes get [`FALLBACK_ROUTE_COLOR`].
#[must_use]
pub fn route_color(route: &str) -> RGB8 {
    ROUTE_COLORS
        .iter()
        .find(|(name, _)| *name == route)
        .map_or(FALLBACK_ROUTE_COLOR, |(_, color)| *color)
}

/// Pick black or white text for legibility on `background`.
///
/// Uses the plain channel sum, not weighted luminance.
#[must_use]
pub fn contrast_text_color(background: RGB8) -> RGB8 {
    if channel_sum(background) > BRIGHTNESS_THRESHOLD {
        colors::BLACK
    } else {
        colors::WHITE
    }
}

/// Sum of the three channels, 0..=765.
#[must_use]
pub const fn channel_sum(color: RGB8) -> u16 {
    color.r as u16 + color.g as u16 + color.b as u16
}
