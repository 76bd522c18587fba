//! Pixel buffers for an RGB LED matrix and the double-buffered canvas that commits them.
//!
//! [`MatrixFrame`] is an in-memory `W`×`H` buffer of [`RGB8`] pixels that implements the
//! [`embedded-graphics`](https://docs.rs/embedded-graphics) [`DrawTarget`] trait, so text
//! and primitives can be drawn into it directly.
//!
//! [`MatrixCanvas`] owns two frames. All drawing goes to the back frame; [`Surface::commit`]
//! hands the finished back frame to a [`Panel`] and swaps, so the panel never sees a
//! half-drawn frame.
//!
//! # Example
//!
//! ```rust
//! use subway_sign::matrix::{Matrix64x32, MatrixCanvas, Panel};
//! use subway_sign::surface::Surface;
//! use subway_sign::Result;
//! use embedded_graphics::prelude::Point;
//! use smart_leds::colors;
//!
//! #[derive(Default)]
//! struct CountingPanel(usize);
//!
//! impl Panel<64, 32> for CountingPanel {
//!     fn show(&mut self, _frame: &Matrix64x32) -> Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut canvas: MatrixCanvas<_, 64, 32> = MatrixCanvas::new(CountingPanel::default());
//! canvas.fill_run(Point::new(0, 0), 4, colors::RED);
//! assert_eq!(canvas.visible()[(0, 0)], colors::BLACK); // not committed yet
//! canvas.commit()?;
//! assert_eq!(canvas.visible()[(0, 0)], colors::RED);
//! assert_eq!(canvas.panel().0, 1);
//! # Ok(())
//! # }
//! ```

// Re-export geometric types from embedded-graphics for convenience
pub use embedded_graphics::geometry::{Point, Size};

use core::{
    convert::Infallible,
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
};
use embedded_graphics::{
    draw_target::DrawTarget,
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X9, FONT_6X10},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use log::trace;
use smart_leds::RGB8;

use crate::config::DisplayConfig;
use crate::surface::Surface;
use crate::{Error, Result};

/// Convert RGB8 (smart-leds) to Rgb888 (embedded-graphics).
#[must_use]
pub const fn rgb8_to_rgb888(color: RGB8) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert Rgb888 (embedded-graphics) to RGB8 (smart-leds).
#[must_use]
pub fn rgb888_to_rgb8(color: Rgb888) -> RGB8 {
    RGB8::new(color.r(), color.g(), color.b())
}

// ============================================================================
// Fonts
// ============================================================================

/// Monospace fonts available to the sign.
///
/// These are the classic X11 fixed fonts that LED matrix signs are usually built around.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignFont {
    /// 4×6, for letters inside small bullets.
    Font4x6,
    /// 5×7, for letters inside standard bullets.
    Font5x7,
    /// 5×8, the standard minute label font.
    Font5x8,
    /// 6×9.
    Font6x9,
    /// 6×10.
    Font6x10,
}

impl SignFont {
    /// Return the `MonoFont` for this variant.
    #[must_use]
    pub const fn to_font(self) -> MonoFont<'static> {
        match self {
            Self::Font4x6 => FONT_4X6,
            Self::Font5x7 => FONT_5X7,
            Self::Font5x8 => FONT_5X8,
            Self::Font6x9 => FONT_6X9,
            Self::Font6x10 => FONT_6X10,
        }
    }

    /// Horizontal distance from one character to the next, in pixels.
    #[must_use]
    pub const fn advance(self) -> u32 {
        let font = self.to_font();
        font.character_size.width + font.character_spacing
    }

    /// Pixel width of `text` when drawn in this font.
    #[must_use]
    pub fn text_width(self, text: &str) -> u32 {
        let char_count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        char_count.saturating_mul(self.advance())
    }
}

// ============================================================================
// MatrixFrame
// ============================================================================

/// A `W`×`H` buffer of LED colors, indexed `[(x, y)]` with `(0, 0)` at the top left.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatrixFrame<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

/// The reference 64×32 sign.
pub type Matrix64x32 = MatrixFrame<64, 32>;

impl<const W: usize, const H: usize> MatrixFrame<W, H> {
    /// Frame width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Frame dimensions as a [`Size`].
    pub const SIZE: Size = Size::new(W as u32, H as u32);

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn get(&self, x_index: usize, y_index: usize) -> Option<RGB8> {
        self.0.get(y_index)?.get(x_index).copied()
    }

    /// True when every pixel is black.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0
            .iter()
            .flatten()
            .all(|pixel| *pixel == RGB8::new(0, 0, 0))
    }

    /// Apply a per-channel lookup table to every pixel.
    pub fn map_channels(&mut self, table: &[u8; 256]) {
        for pixel in self.0.iter_mut().flatten() {
            *pixel = RGB8::new(
                table[usize::from(pixel.r)],
                table[usize::from(pixel.g)],
                table[usize::from(pixel.b)],
            );
        }
    }
}

impl<const W: usize, const H: usize> Deref for MatrixFrame<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for MatrixFrame<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for MatrixFrame<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for MatrixFrame<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> Default for MatrixFrame<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for MatrixFrame<W, H> {
    fn size(&self) -> Size {
        Self::SIZE
    }
}

impl<const W: usize, const H: usize> DrawTarget for MatrixFrame<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if let Some(pixel) = self
                .0
                .get_mut(y_index)
                .and_then(|row| row.get_mut(x_index))
            {
                *pixel = rgb888_to_rgb8(color);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Panel
// ============================================================================

/// Receives each committed frame: the matrix driver, a PNG preview, or a test double.
pub trait Panel<const W: usize, const H: usize> {
    /// Show `frame` in place of whatever was visible before.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel can no longer display frames.
    fn show(&mut self, frame: &MatrixFrame<W, H>) -> Result<()>;
}

impl<const W: usize, const H: usize, P: Panel<W, H> + ?Sized> Panel<W, H> for &mut P {
    fn show(&mut self, frame: &MatrixFrame<W, H>) -> Result<()> {
        (**self).show(frame)
    }
}

// ============================================================================
// MatrixCanvas
// ============================================================================

/// Double-buffered pixel [`Surface`] in front of a [`Panel`].
pub struct MatrixCanvas<P, const W: usize, const H: usize> {
    panel: P,
    front: MatrixFrame<W, H>,
    back: MatrixFrame<W, H>,
}

impl<P: Panel<W, H>, const W: usize, const H: usize> MatrixCanvas<P, W, H> {
    /// Create a canvas with both buffers blank.
    #[must_use]
    pub const fn new(panel: P) -> Self {
        Self {
            panel,
            front: MatrixFrame::new(),
            back: MatrixFrame::new(),
        }
    }

    /// Create a canvas after checking that `display` describes a `W`×`H` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeometryMismatch`] if the configured rows/cols differ from the
    /// canvas size.
    pub fn for_display(panel: P, display: &DisplayConfig) -> Result<Self> {
        let canvas_width = W as u32;
        let canvas_height = H as u32;
        if display.cols != canvas_width || display.rows != canvas_height {
            return Err(Error::GeometryMismatch {
                display_width: display.cols,
                display_height: display.rows,
                canvas_width,
                canvas_height,
            });
        }
        Ok(Self::new(panel))
    }

    /// The most recently committed frame.
    #[must_use]
    pub const fn visible(&self) -> &MatrixFrame<W, H> {
        &self.front
    }

    /// The panel frames are committed to.
    #[must_use]
    pub const fn panel(&self) -> &P {
        &self.panel
    }

    /// Give back the panel.
    #[must_use]
    pub fn into_panel(self) -> P {
        self.panel
    }
}

impl<P: Panel<W, H>, const W: usize, const H: usize> Surface for MatrixCanvas<P, W, H> {
    fn fill_run(&mut self, start: Point, width: u32, color: RGB8) {
        let Ok(()) = Rectangle::new(start, Size::new(width, 1))
            .into_styled(PrimitiveStyle::with_fill(rgb8_to_rgb888(color)))
            .draw(&mut self.back);
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: SignFont, color: RGB8) {
        let mono_font = font.to_font();
        let style = MonoTextStyle::new(&mono_font, rgb8_to_rgb888(color));
        let Ok(_) = Text::new(text, origin, style).draw(&mut self.back);
    }

    fn clear(&mut self) {
        self.back = MatrixFrame::new();
    }

    fn commit(&mut self) -> Result<()> {
        self.panel.show(&self.back)?;
        mem::swap(&mut self.front, &mut self.back);
        trace!("MatrixCanvas::commit: frame swapped");
        Ok(())
    }
}
