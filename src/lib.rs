//! Render real-time subway arrivals onto a fixed-size RGB LED matrix.
//!
//! The pipeline, leaf first:
//!
//! - [`color`]: route colors and contrast text color.
//! - [`groups`]: merge one row's arrivals into display groups.
//! - [`row`]: lay groups out left to right within the overflow threshold.
//! - [`bullet`]: draw the round route bullet with its letter.
//! - [`renderer`]: compose all rows (or `NO DATA`) and commit them atomically.
//!
//! The renderer draws through the [`surface::Surface`] capability. Two surfaces ship with
//! the crate: [`matrix::MatrixCanvas`], a double-buffered pixel canvas that hands finished
//! frames to a [`matrix::Panel`], and [`console::ConsoleSurface`], a textual simulation
//! for machines without a matrix attached.
//!
//! # Example
//!
//! ```rust
//! use subway_sign::{Result, console::ConsoleSurface, geometry::Geometry, renderer::SignRenderer};
//! use subway_sign::{config::LayoutConfig, snapshot::Snapshot};
//!
//! # fn main() -> Result<()> {
//! let snapshot = Snapshot::from_json_str(
//!     r#"{"rows": {"row1": {"arrivals": [{"route": "A", "minutesUntil": 3}]}}}"#,
//! );
//! let mut renderer = SignRenderer::new(
//!     ConsoleSurface::new(Vec::new(), &Geometry::MATRIX_64X32),
//!     Geometry::MATRIX_64X32,
//!     LayoutConfig::default(),
//! );
//! renderer.render(snapshot.as_ref())?;
//! assert_eq!(renderer.surface().last_lines(), ["A 3", "---", "---"]);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod bullet;
pub mod color;
pub mod config;
pub mod console;
mod error;
pub mod frame;
pub mod geometry;
pub mod groups;
pub mod matrix;
#[cfg(feature = "preview")]
pub mod png_panel;
pub mod renderer;
pub mod row;
pub mod snapshot;
pub mod surface;
#[cfg(feature = "preview")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
