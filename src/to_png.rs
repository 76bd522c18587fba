//! Preview images of a matrix frame, each LED drawn as a soft round dot.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;
use png::{BitDepth, ColorType, Encoder, ScaledFloat};

use crate::matrix::MatrixFrame;
use crate::{Error, Result};

/// Inverse gamma applied when turning LED drive levels into preview light.
pub const PREVIEW_INVERSE_GAMMA: f32 = 2.2;

/// Write `frame` as a PNG whose larger side is at most `target_max_dimension` pixels.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] when the target size is zero, and I/O or encoding
/// errors from writing the file.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &MatrixFrame<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<()> {
    write_frame_png_with_gamma(frame, output_path, target_max_dimension, PREVIEW_INVERSE_GAMMA)
}

/// Like [`write_frame_png`] with a custom preview inverse gamma.
///
/// # Errors
///
/// See [`write_frame_png`]. A non-positive gamma is also rejected.
pub fn write_frame_png_with_gamma<const W: usize, const H: usize>(
    frame: &MatrixFrame<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    preview_inverse_gamma: f32,
) -> Result<()> {
    if preview_inverse_gamma <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "preview inverse gamma must be positive, got {preview_inverse_gamma}"
        )));
    }
    let output_path = output_path.as_ref();
    let cell_size = select_cell_size(W as u32, H as u32, target_max_dimension)?;
    let (width, height, pixels) = panel_pixels(frame, cell_size, preview_inverse_gamma);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    info!("wrote {width}x{height} preview to {}", output_path.display());
    Ok(())
}

/// Largest cell size whose image, border included, fits `target_max_dimension`.
fn select_cell_size(panel_width: u32, panel_height: u32, target_max_dimension: u32) -> Result<u32> {
    if target_max_dimension == 0 {
        return Err(Error::InvalidConfig(
            "preview target dimension must be positive".into(),
        ));
    }
    // Cells below 4 pixels leave no room for a dot.
    let mut cell_size = target_max_dimension.max(4);
    while cell_size > 4 {
        let led_radius = led_radius(cell_size);
        let max_dimension = panel_width.max(panel_height) * cell_size + led_radius * 2;
        if max_dimension <= target_max_dimension {
            break;
        }
        cell_size -= 1;
    }
    Ok(cell_size)
}

const fn led_margin(cell_size: u32) -> u32 {
    let margin = cell_size / 8;
    if margin == 0 { 1 } else { margin }
}

const fn led_radius(cell_size: u32) -> u32 {
    (cell_size - led_margin(cell_size) * 2) / 2
}

/// Big-endian 16-bit RGB samples for the whole preview image.
fn panel_pixels<const W: usize, const H: usize>(
    frame: &MatrixFrame<W, H>,
    cell_size: u32,
    preview_inverse_gamma: f32,
) -> (u32, u32, Vec<u8>) {
    let led_radius = led_radius(cell_size).max(1);
    let fade_width = (led_radius / 3).max(1);
    let border = led_radius;
    let width = (W as u32) * cell_size + border * 2;
    let height = (H as u32) * cell_size + border * 2;
    let mut bytes = vec![0u8; (width * height * 3 * 2) as usize];
    let center = (cell_size - 1) as i32 / 2;
    let led_radius_f = led_radius as f32;
    let inner_radius_f = led_radius.saturating_sub(fade_width) as f32;
    let radius_sq = (led_radius as i32) * (led_radius as i32);

    for (row_index, row) in frame.iter().enumerate() {
        for (column_index, pixel) in row.iter().enumerate() {
            if pixel.r == 0 && pixel.g == 0 && pixel.b == 0 {
                continue;
            }
            let linear = [pixel.r, pixel.g, pixel.b]
                .map(|channel| inverse_gamma_to_linear(channel, preview_inverse_gamma));
            let cell_origin_x = (column_index as u32) * cell_size;
            let cell_origin_y = (row_index as u32) * cell_size;

            for local_y in 0..cell_size {
                let delta_y = local_y as i32 - center;
                for local_x in 0..cell_size {
                    let delta_x = local_x as i32 - center;
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > radius_sq {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius_f {
                        1.0
                    } else {
                        let fade_span = led_radius_f - inner_radius_f;
                        (1.0 - (distance - inner_radius_f) / fade_span).max(0.0)
                    };
                    let x = border + cell_origin_x + local_x;
                    let y = border + cell_origin_y + local_y;
                    let pixel_index = ((y * width + x) * 3 * 2) as usize;
                    for (offset, channel) in linear.iter().enumerate() {
                        let sample = linear_to_u16(channel * intensity).to_be_bytes();
                        bytes[pixel_index + offset * 2] = sample[0];
                        bytes[pixel_index + offset * 2 + 1] = sample[1];
                    }
                }
            }
        }
    }

    (width, height, bytes)
}

fn inverse_gamma_to_linear(channel: u8, preview_inverse_gamma: f32) -> f32 {
    let normalized = f32::from(channel) / 255.0;
    normalized.powf(preview_inverse_gamma)
}

fn linear_to_u16(value: f32) -> u16 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 65535.0).round() as u16
}

