//! The drawing capability the renderer is written against.
//!
//! The renderer never asks whether a matrix is attached. The program picks a surface once
//! at startup ([`MatrixCanvas`](crate::matrix::MatrixCanvas) for pixels,
//! [`ConsoleSurface`](crate::console::ConsoleSurface) for a textual simulation) and the
//! same drawing code runs against either.

use embedded_graphics::geometry::Point;
use smart_leds::RGB8;

use crate::Result;
use crate::matrix::SignFont;

/// An off-screen drawing target with an atomic commit.
///
/// Drawing calls only touch the off-screen buffer; nothing is visible until [`commit`].
/// Out-of-bounds pixels are clipped, never an error.
///
/// [`commit`]: Surface::commit
pub trait Surface {
    /// Fill `width` pixels of row `start.y`, beginning at `start.x`.
    fn fill_run(&mut self, start: Point, width: u32, color: RGB8);

    /// Draw `text` with its baseline's left end at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: SignFont, color: RGB8);

    /// Blank the off-screen buffer.
    fn clear(&mut self);

    /// Make the off-screen buffer visible in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the display behind the surface cannot accept the frame.
    fn commit(&mut self) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_run(&mut self, start: Point, width: u32, color: RGB8) {
        (**self).fill_run(start, width, color);
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: SignFont, color: RGB8) {
        (**self).draw_text(text, origin, font, color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn commit(&mut self) -> Result<()> {
        (**self).commit()
    }
}
