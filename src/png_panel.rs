//! A [`Panel`] that writes every shown frame to a PNG preview file.
//!
//! Brightness is applied the way the matrix driver would apply it, through a lookup table
//! built once at construction, so the preview shows what the LEDs would emit.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::DisplayConfig;
use crate::matrix::{MatrixFrame, Panel};
use crate::to_png::write_frame_png;
use crate::{Error, Result};

/// Default size of the longer side of preview images.
pub const DEFAULT_PREVIEW_DIMENSION: u32 = 640;

/// Build a lookup table that scales each channel to `percent` of full drive.
///
/// Values above 100 are treated as 100.
#[must_use]
pub const fn brightness_table(percent: u8) -> [u8; 256] {
    let percent = if percent > 100 { 100 } else { percent } as u16;
    let mut table = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        table[index] = ((index as u16 * percent) / 100) as u8;
        index += 1;
    }
    table
}

/// Writes each shown frame to one PNG path, overwriting the previous frame.
pub struct PngPanel {
    path: PathBuf,
    target_max_dimension: u32,
    brightness: [u8; 256],
    frames_written: usize,
}

impl PngPanel {
    /// Preview at full brightness.
    #[must_use]
    pub fn new(path: impl AsRef<Path>, target_max_dimension: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            target_max_dimension,
            brightness: brightness_table(100),
            frames_written: 0,
        }
    }

    /// Preview at the brightness `display` asks for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the brightness is above 100 percent.
    pub fn from_display(path: impl AsRef<Path>, display: &DisplayConfig) -> Result<Self> {
        if display.brightness > 100 {
            return Err(Error::InvalidConfig(format!(
                "brightness must be 0..=100, got {}",
                display.brightness
            )));
        }
        let mut panel = Self::new(path, DEFAULT_PREVIEW_DIMENSION);
        panel.brightness = brightness_table(display.brightness);
        Ok(panel)
    }

    /// Where frames are written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How many frames have been written so far.
    #[must_use]
    pub const fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl<const W: usize, const H: usize> Panel<W, H> for PngPanel {
    fn show(&mut self, frame: &MatrixFrame<W, H>) -> Result<()> {
        let mut scaled = *frame;
        scaled.map_channels(&self.brightness);
        write_frame_png(&scaled, &self.path, self.target_max_dimension)?;
        self.frames_written += 1;
        debug!("PngPanel: frame {} written", self.frames_written);
        Ok(())
    }
}
