//! Textual simulation of the sign for machines without a matrix attached.
//!
//! Pixel fills are ignored. Text draws are collected and, on commit, written out one
//! line per row band in left-to-right order, so a frame with an `A` bullet due in 1
//! and 3 minutes prints `A 1 3`.

use std::io::Write;

use embedded_graphics::geometry::Point;
use itertools::Itertools;
use log::debug;
use smart_leds::RGB8;

use crate::geometry::Geometry;
use crate::matrix::SignFont;
use crate::surface::Surface;
use crate::Result;

/// A [`Surface`] that prints each committed frame as text.
pub struct ConsoleSurface<W> {
    writer: W,
    band_pitch: i32,
    pending: Vec<(Point, String)>,
    last_lines: Vec<String>,
}

impl<W: Write> ConsoleSurface<W> {
    /// Print frames to `writer`, one line per band of `geometry`.
    #[must_use]
    pub fn new(writer: W, geometry: &Geometry) -> Self {
        let band_pitch = (geometry.band_height() + geometry.row_gap).max(1) as i32;
        Self {
            writer,
            band_pitch,
            pending: Vec::new(),
            last_lines: Vec::new(),
        }
    }

    /// Lines printed for the most recent commit.
    #[must_use]
    pub fn last_lines(&self) -> &[String] {
        &self.last_lines
    }

    /// The underlying writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Give back the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn fill_run(&mut self, _start: Point, _width: u32, _color: RGB8) {}

    fn draw_text(&mut self, text: &str, origin: Point, _font: SignFont, _color: RGB8) {
        self.pending.push((origin, text.to_owned()));
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn commit(&mut self) -> Result<()> {
        let band_pitch = self.band_pitch;
        let lines: Vec<String> = {
            let bands = self
                .pending
                .iter()
                .sorted_by_key(|(origin, _)| (origin.y.div_euclid(band_pitch), origin.x))
                .chunk_by(|(origin, _)| origin.y.div_euclid(band_pitch));
            let lines = (&bands)
                .into_iter()
                .map(|(_, texts)| texts.map(|(_, text)| text.as_str()).join(" "))
                .collect();
            lines
        };

        for line in &lines {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        debug!("ConsoleSurface::commit: {} lines", lines.len());

        self.pending.clear();
        self.last_lines = lines;
        Ok(())
    }
}
